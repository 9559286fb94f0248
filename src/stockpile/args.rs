use clap::Parser;

/// Returns the version string, including the git hash for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "stockpile", bin_name = "stockpile", version = get_version())]
#[command(about = "File-backed inventory ledger for the command line", long_about = None)]
pub struct Cli {
    /// Log in as this user instead of prompting (admin/staff; anything
    /// else is treated as staff)
    #[arg(short, long)]
    pub user: Option<String>,
}
