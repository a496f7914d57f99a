use pulseboard_types::UserId;

/// Sort clause rendered as PostgREST `order=<column>.<dir>.<nulls>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub descending: bool,
    pub nulls_last: bool,
}

impl Order {
    /// Newest first, unpublished rows last
    pub fn published_desc() -> Self {
        Self {
            column: "published_at",
            descending: true,
            nulls_last: true,
        }
    }

    fn render(&self) -> String {
        let direction = if self.descending { "desc" } else { "asc" };
        let nulls = if self.nulls_last {
            "nullslast"
        } else {
            "nullsfirst"
        };
        format!("{}.{}.{}", self.column, direction, nulls)
    }
}

/// Read query against the posts table.
///
/// Always scoped to one owner; there is no way to build an unfiltered query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    pub owner: UserId,
    pub order: Order,
    pub limit: Option<usize>,
}

impl PostQuery {
    pub fn owned_by(owner: UserId) -> Self {
        Self {
            owner,
            order: Order::published_desc(),
            limit: None,
        }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("select", "*".to_string()),
            ("user_id", format!("eq.{}", self.owner)),
            ("order", self.order.render()),
        ];
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_query_pairs_default() {
        let owner = UserId::new(Uuid::from_u128(1));
        let pairs = PostQuery::owned_by(owner).to_query_pairs();

        assert_eq!(
            pairs,
            vec![
                ("select", "*".to_string()),
                ("user_id", "eq.00000000-0000-0000-0000-000000000001".to_string()),
                ("order", "published_at.desc.nullslast".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_with_limit() {
        let owner = UserId::new(Uuid::from_u128(1));
        let pairs = PostQuery::owned_by(owner).limit(25).to_query_pairs();
        assert_eq!(pairs.last(), Some(&("limit", "25".to_string())));
    }
}
