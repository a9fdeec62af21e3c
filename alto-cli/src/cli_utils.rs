use crate::cli_opts::{DraftFieldsOpt, NetworkOpt};
use alto_auction::frontend::AuctionDraftForm;
use alto_auction::state::DraftField;
use alto_client::{NetworkConfig, NetworkProfile};

use log::{debug, info, warn};

use std::io::{BufRead, Write};

pub const PROMPT: &str = "> ";

const FORM_HELP: &str = "\
  <field> <value>   set a field (start-price, token-id, min-increment, direct-buy-price, duration)
  show              print the draft
  create            Create Auction
  mint              Mint NFT
  items             print your items
  validate          check whether the draft is a valid auction
  help              print this message
  quit              leave the form";

/// A single line of the interactive form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Update(DraftField, String),
    Show,
    Create,
    Mint,
    Items,
    Validate,
    Help,
    Quit,
    Empty,
}

pub fn parse_form_line(line: &str) -> Result<FormCommand, String> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    let command = match head {
        "" => FormCommand::Empty,
        "show" => FormCommand::Show,
        "create" => FormCommand::Create,
        "mint" => FormCommand::Mint,
        "items" => FormCommand::Items,
        "validate" => FormCommand::Validate,
        "help" => FormCommand::Help,
        "quit" | "exit" => FormCommand::Quit,
        key => {
            let field = key.parse::<DraftField>().map_err(|e| e.to_string())?;
            FormCommand::Update(field, rest.to_owned())
        }
    };
    Ok(command)
}

/// Copies every given raw value into the form, in form order.
pub fn apply_fields(form: &mut AuctionDraftForm, fields: &DraftFieldsOpt) {
    let values = [
        (DraftField::StartPrice, &fields.start_price),
        (DraftField::TokenId, &fields.token_id),
        (DraftField::MinIncrement, &fields.min_increment),
        (DraftField::DirectBuyPrice, &fields.direct_buy_price),
        (DraftField::EndTime, &fields.duration),
    ];
    for (field, value) in values {
        if let Some(raw) = value {
            form.update_field(field, raw);
        }
    }
}

pub fn load_config(opt: &NetworkOpt) -> Result<NetworkConfig, anyhow::Error> {
    let config = match opt.config {
        Some(ref path) => NetworkConfig::load(path)?,
        None => {
            debug!("no configuration given, using built-in defaults");
            NetworkConfig::default()
        }
    };
    config.validate()?;
    Ok(config)
}

pub fn write_form<W: Write>(form: &AuctionDraftForm, output: &mut W) -> std::io::Result<()> {
    for (label, value) in form.rows() {
        writeln!(output, "{:<20} {}", label, value)?;
    }
    Ok(())
}

pub fn write_network<W: Write>(
    config: &NetworkConfig,
    name: &str,
    profile: &NetworkProfile,
    output: &mut W,
) -> std::io::Result<()> {
    let optimizer = &config.solidity.settings.optimizer;
    writeln!(output, "compiler:        {}", config.solidity.version)?;
    writeln!(
        output,
        "optimizer:       {} ({} runs)",
        if optimizer.enabled { "enabled" } else { "disabled" },
        optimizer.runs
    )?;
    writeln!(output, "network:         {}", name)?;
    writeln!(output, "url:             {}", profile.url)?;
    writeln!(output, "chain id:        {}", profile.chain_id)?;
    let accounts = profile
        .accounts
        .iter()
        .map(|credential| credential.to_string())
        .collect::<Vec<_>>();
    writeln!(output, "accounts:        [{}]", accounts.join(", "))?;
    writeln!(output, "nft:             {}", config.contracts.nft)?;
    writeln!(output, "auction manager: {}", config.contracts.auction_manager)?;
    Ok(())
}

/// Runs the line-driven form until `quit` or end of input.
pub fn run_form_session<R: BufRead, W: Write>(
    form: &mut AuctionDraftForm,
    input: R,
    output: &mut W,
) -> Result<(), anyhow::Error> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;
    for line in input.lines() {
        let line = line?;
        match parse_form_line(&line) {
            Ok(FormCommand::Update(field, raw)) => {
                form.update_field(field, &raw);
                writeln!(output, "{:<20} {}", field.label(), form.draft().get(field))?;
            }
            Ok(FormCommand::Show) => write_form(form, output)?,
            Ok(FormCommand::Create) => form.submit(),
            Ok(FormCommand::Mint) => form.mint(),
            Ok(FormCommand::Items) => {
                writeln!(output, "Your items")?;
                writeln!(output, "{}", form.render_owned_items())?;
            }
            Ok(FormCommand::Validate) => match form.draft().validate() {
                Ok(auction) => writeln!(output, "valid: {:?}", auction)?,
                Err(e) => writeln!(output, "invalid: {}", e)?,
            },
            Ok(FormCommand::Help) => writeln!(output, "{}", FORM_HELP)?,
            Ok(FormCommand::Quit) => {
                info!("leaving form");
                return Ok(());
            }
            Ok(FormCommand::Empty) => {}
            Err(e) => warn!("{} (type \"help\" for commands)", e),
        }
        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }
    writeln!(output)?;
    Ok(())
}
