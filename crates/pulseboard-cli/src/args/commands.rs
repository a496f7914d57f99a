use clap::Subcommand;
use pulseboard_types::MAX_WINDOW_DAYS;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Sign in with email and password")]
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "PULSEBOARD_PASSWORD", hide_env_values = true)]
        password: String,
    },

    #[command(about = "Sign out and forget the stored session")]
    Logout,

    #[command(about = "Show the signed-in account")]
    Whoami,

    #[command(about = "List your posts, newest first")]
    Posts {
        #[arg(long)]
        limit: Option<usize>,
    },

    #[command(about = "Compare this period's metrics with the previous one")]
    Summary {
        /// Length of each comparison window (defaults to the configured value)
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..=MAX_WINDOW_DAYS))]
        window_days: Option<i64>,
    },

    #[command(about = "Open the interactive dashboard")]
    Dashboard,

    #[command(about = "Manage backend configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the effective configuration")]
    Show,

    #[command(about = "Point pulseboard at a Supabase project")]
    Init {
        #[arg(long)]
        url: String,

        #[arg(long)]
        anon_key: String,

        /// Table holding scraped posts
        #[arg(long)]
        posts_table: Option<String>,
    },
}
