use alto_client::DEFAULT_NETWORK;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "alto", about = "Draft NFT auctions from the terminal")]
pub struct AltoOpt {
    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Edits a draft interactively, one command per line on stdin
    Form,
    /// Fills a draft from the given values and runs "Create Auction"
    Create {
        #[structopt(flatten)]
        fields: DraftFieldsOpt,
        #[structopt(long, help("Fails if the draft is not a valid auction"))]
        validate: bool,
    },
    /// Runs "Mint NFT"
    Mint,
    /// Prints the configured network profile
    Network(NetworkOpt),
    /// Validates the draft and builds its payload without broadcasting it
    Submit {
        #[structopt(flatten)]
        network: NetworkOpt,
        #[structopt(flatten)]
        fields: DraftFieldsOpt,
        #[structopt(long, help("Auction start as a UNIX timestamp (default = now)"))]
        start_time: Option<i64>,
    },
}

/// Raw input values, parsed the same way the form parses keystrokes.
#[derive(Debug, Default, StructOpt)]
pub struct DraftFieldsOpt {
    #[structopt(long, allow_hyphen_values(true), help("Start Price"))]
    pub start_price: Option<String>,
    #[structopt(long, allow_hyphen_values(true), help("Token Id"))]
    pub token_id: Option<String>,
    #[structopt(long, allow_hyphen_values(true), help("Minimum Increment"))]
    pub min_increment: Option<String>,
    #[structopt(long, allow_hyphen_values(true), help("Direct Buy Price"))]
    pub direct_buy_price: Option<String>,
    #[structopt(long, allow_hyphen_values(true), help("Duration In Minutes"))]
    pub duration: Option<String>,
}

#[derive(Debug, StructOpt)]
pub struct NetworkOpt {
    #[structopt(long, help("JSON network configuration (default = built-in fuji profile)"))]
    pub config: Option<PathBuf>,
    #[structopt(long, default_value(DEFAULT_NETWORK), help("Network profile to use"))]
    pub network: String,
}
