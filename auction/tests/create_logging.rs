use alto_auction::frontend::AuctionDraftForm;
use alto_auction::state::DraftField;

use log::{Level, LevelFilter, Log, Metadata, Record};

use std::sync::Mutex;

// This file includes the following tests:
//
//   - Create Auction emits exactly one info record holding the draft
//   - Mint and field updates emit nothing at info level
//
// It installs a process-wide logger, so it keeps a single test fn.

static RECORDER: Recorder = Recorder;
static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

struct Recorder;

impl Log for Recorder {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.target().starts_with("alto_auction") {
            RECORDS
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

fn take_info_records() -> Vec<String> {
    RECORDS
        .lock()
        .unwrap()
        .drain(..)
        .filter(|(level, _)| *level <= Level::Info)
        .map(|(_, message)| message)
        .collect()
}

#[test]
fn create_logs_the_draft() {
    log::set_logger(&RECORDER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut form = AuctionDraftForm::new();
    form.update_field(DraftField::StartPrice, "100");
    form.mint();
    assert!(take_info_records().is_empty());

    form.submit();
    assert_eq!(
        take_info_records(),
        vec![
            "{ startPrice: 100, endTime: null, tokenId: null, minIncrement: null, directBuyPrice: null }"
                .to_owned()
        ]
    );

    let form = AuctionDraftForm::new();
    form.submit();
    assert_eq!(
        take_info_records(),
        vec![
            "{ startPrice: null, endTime: null, tokenId: null, minIncrement: null, directBuyPrice: null }"
                .to_owned()
        ]
    );
}
