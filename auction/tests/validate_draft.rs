use alto_auction::assertions::ValidatedAuction;
use alto_auction::frontend::AuctionDraftForm;
use alto_auction::state::{AuctionDraft, DraftField};
use alto_auction::ValidationError;

fn filled_form() -> AuctionDraftForm {
    let mut form = AuctionDraftForm::new();
    form.update_field(DraftField::StartPrice, "100");
    form.update_field(DraftField::TokenId, "0");
    form.update_field(DraftField::MinIncrement, "10");
    form.update_field(DraftField::DirectBuyPrice, "1000");
    form.update_field(DraftField::EndTime, "60");
    form
}

#[test]
fn valid_draft() {
    let form = filled_form();
    let auction = form.draft().validate().unwrap();
    assert_eq!(
        auction,
        ValidatedAuction {
            start_price: 100,
            token_id: 0,
            min_increment: 10,
            direct_buy_price: 1000,
            duration_minutes: 60,
        }
    );
    assert_eq!(auction.end_timestamp(1_700_000_000), Ok(1_700_003_600));
}

#[test]
fn invalid_drafts() {
    assert_eq!(
        AuctionDraft::default().validate(),
        Err(ValidationError::Missing(DraftField::StartPrice))
    );

    let mut form = filled_form();
    form.update_field(DraftField::TokenId, "abc");
    assert_eq!(
        form.draft().validate(),
        Err(ValidationError::NotANumber(DraftField::TokenId))
    );

    let mut form = filled_form();
    form.update_field(DraftField::MinIncrement, "-1");
    assert_eq!(
        form.draft().validate(),
        Err(ValidationError::Negative(DraftField::MinIncrement))
    );

    let mut form = filled_form();
    form.update_field(DraftField::EndTime, "0");
    assert_eq!(
        form.draft().validate(),
        Err(ValidationError::Zero(DraftField::EndTime))
    );

    let mut form = filled_form();
    form.update_field(DraftField::DirectBuyPrice, "99");
    assert_eq!(
        form.draft().validate(),
        Err(ValidationError::DirectBuyBelowStart {
            start: 100,
            direct_buy: 99
        })
    );
}

#[test]
fn validation_does_not_touch_draft() {
    let form = filled_form();
    let before = *form.draft();
    let _ = form.draft().validate();
    form.submit();
    assert_eq!(*form.draft(), before);
}

#[cfg(feature = "client")]
#[test]
fn draft_serializes_camel_case() {
    let form = filled_form();
    let json = serde_json::to_value(form.draft()).unwrap();
    assert_eq!(json["startPrice"]["int"], 100);
    assert_eq!(json["directBuyPrice"]["int"], 1000);
    assert_eq!(
        serde_json::to_value(AuctionDraft::default()).unwrap()["endTime"],
        "unset"
    );
}
