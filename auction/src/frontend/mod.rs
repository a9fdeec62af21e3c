use crate::state::{AuctionDraft, AuctionList, DraftField, FieldValue, OwnedItems, TokenId};
use crate::utils::parse_int;
use crate::OWNED_ITEMS_SEPARATOR;

use log::info;

/// Handle returned by [`AuctionDraftForm::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&AuctionDraft)>;

/// The auction creation form.
///
/// Holds exactly one [`AuctionDraft`] for the lifetime of the form. Every
/// input event replaces the draft and calls each registered observer with
/// the replacement.
pub struct AuctionDraftForm {
    draft: AuctionDraft,
    auctions: AuctionList,
    my_items: OwnedItems,
    observers: Vec<(ObserverId, Observer)>,
    next_observer_id: u64,
}

impl Default for AuctionDraftForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AuctionDraftForm {
    pub fn new() -> Self {
        Self {
            draft: AuctionDraft::default(),
            auctions: AuctionList::new(),
            my_items: OwnedItems::new(),
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    pub fn draft(&self) -> &AuctionDraft {
        &self.draft
    }

    pub fn auctions(&self) -> &AuctionList {
        &self.auctions
    }

    pub fn owned_items(&self) -> &OwnedItems {
        &self.my_items
    }

    /// Registers a callback invoked with every new draft.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&AuctionDraft) + 'static,
    {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let len_before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != len_before
    }

    /// Input change handler of a single field.
    ///
    /// Unparsable input is stored as [`FieldValue::NotANumber`] and no bounds
    /// are checked.
    pub fn update_field(&mut self, field: DraftField, raw_value: &str) {
        let value = parse_int(raw_value);
        self.replace_draft(self.draft.with_field(field, value));
    }

    /// Replaces the whole draft and notifies observers.
    pub fn replace_draft(&mut self, draft: AuctionDraft) {
        self.draft = draft;
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.draft);
        }
    }

    /// "Create Auction" handler: emits the current draft to the log.
    pub fn submit(&self) {
        info!("{}", self.draft);
    }

    /// "Mint NFT" handler. Not bound to any action.
    pub fn mint(&self) {}

    pub fn render_owned_items(&self) -> String {
        render_owned_items(Some(self.my_items.as_slice()))
    }

    /// Text shown next to each input, in form order.
    pub fn rows(&self) -> Vec<(&'static str, FieldValue)> {
        DraftField::ALL
            .iter()
            .map(|field| (field.label(), self.draft.get(*field)))
            .collect()
    }
}

/// Renders the "Your items" display. An absent list renders like an empty one.
pub fn render_owned_items(items: Option<&[TokenId]>) -> String {
    items
        .unwrap_or_default()
        .iter()
        .map(|id| format!("id: {}", id))
        .collect::<Vec<_>>()
        .join(OWNED_ITEMS_SEPARATOR)
}

#[test]
fn render_owned_items_test() {
    assert_eq!(render_owned_items(None), "");
    assert_eq!(render_owned_items(Some(&[][..])), "");
    assert_eq!(render_owned_items(Some(&[4][..])), "id: 4");
    assert_eq!(render_owned_items(Some(&[4, 17][..])), "id: 4, id: 17");
}
