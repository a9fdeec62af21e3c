mod cli_opts;
mod cli_utils;

use cli_opts::{AltoOpt, Command, DraftFieldsOpt, NetworkOpt};
use cli_utils::*;

use alto_auction::frontend::AuctionDraftForm;
use alto_client::{DryRunSubmitter, Submitter};

use env_logger::Env;
use log::{debug, error, info};
use structopt::StructOpt;

pub fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let opt = AltoOpt::from_args();

    if let Err(e) = try_main(opt) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn try_main(opt: AltoOpt) -> Result<(), anyhow::Error> {
    let mut form = AuctionDraftForm::new();
    form.subscribe(|draft| debug!("draft replaced: {}", draft));

    match opt.cmd {
        Command::Form => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_form_session(&mut form, stdin.lock(), &mut stdout.lock())
        }
        Command::Create { fields, validate } => create(&mut form, &fields, validate),
        Command::Mint => {
            form.mint();
            Ok(())
        }
        Command::Network(network) => show_network(&network),
        Command::Submit {
            network,
            fields,
            start_time,
        } => submit(&mut form, &network, &fields, start_time),
    }
}

fn create(
    form: &mut AuctionDraftForm,
    fields: &DraftFieldsOpt,
    validate: bool,
) -> Result<(), anyhow::Error> {
    apply_fields(form, fields);
    if validate {
        let auction = form.draft().validate()?;
        info!("draft is a valid auction: {:?}", auction);
    }
    form.submit();
    Ok(())
}

fn show_network(opt: &NetworkOpt) -> Result<(), anyhow::Error> {
    let config = load_config(opt)?;
    let profile = config.network(&opt.network)?;
    let stdout = std::io::stdout();
    write_network(&config, &opt.network, profile, &mut stdout.lock())?;
    Ok(())
}

fn submit(
    form: &mut AuctionDraftForm,
    network: &NetworkOpt,
    fields: &DraftFieldsOpt,
    start_time: Option<i64>,
) -> Result<(), anyhow::Error> {
    let config = load_config(network)?;
    apply_fields(form, fields);

    let mut submitter = DryRunSubmitter::new(config, network.network.clone());
    if let Some(timestamp) = start_time {
        submitter = submitter.with_start_timestamp(timestamp);
    }
    submitter.submit_draft(form.draft())?;
    Ok(())
}
