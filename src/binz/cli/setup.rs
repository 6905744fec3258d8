use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "binz", bin_name = "binz", version = get_version())]
#[command(about = "Keep track of what is inside your storage bins", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new storage
    #[command(alias = "new")]
    Add {
        /// Name of the storage (e.g. Garage shelf)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Where the storage lives
        #[arg(short, long, default_value = "")]
        location: String,
    },

    /// List all storages
    #[command(alias = "list")]
    Ls,

    /// Open a storage and show its contents
    #[command(alias = "o")]
    Open {
        /// Storage id
        id: String,
    },

    /// Go back to the storage list
    Back,

    /// Put an item into a storage (the open one unless --in is given)
    #[command(alias = "p")]
    Put {
        /// Name of the item
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// How many (defaults to 1)
        #[arg(short, long, default_value = "")]
        quantity: String,

        /// Free-text notes
        #[arg(short, long, default_value = "")]
        description: String,

        /// Storage id to put the item into
        #[arg(long = "in", value_name = "STORAGE_ID")]
        storage: Option<String>,
    },

    /// Delete a storage and everything in it
    #[command(alias = "delete")]
    Rm {
        /// Storage id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Remove an item from a storage (the open one unless --in is given)
    RmItem {
        /// Item id
        item_id: String,

        /// Storage id holding the item
        #[arg(long = "in", value_name = "STORAGE_ID")]
        storage: Option<String>,
    },

    /// Open a storage by the id printed on its label
    Scan {
        /// Id as printed on the label
        id: String,
    },

    /// Print a label for a storage (the open one if no id is given)
    Label {
        /// Storage id
        id: Option<String>,
    },

    /// Show the current screen state as JSON
    State,

    /// Get or set configuration
    Config {
        /// Configuration key (id-strategy, strict-persistence, collection-key)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
