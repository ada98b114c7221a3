use lendlog::{
    core::{
        catalog::CatalogError, lending::LendingError, library::Library, registry::RegistryError,
    },
    item::{ItemDraft, LendState},
    snapshot::LibrarySnapshotV1,
    types::{FIRST_MEMBER_ID, MemberId},
};

fn orwell() -> ItemDraft {
    ItemDraft::new("1984", "Orwell", "ISBN-A")
}

#[test]
fn duplicate_item_is_rejected_and_catalog_unchanged() {
    let mut lib = Library::new();
    lib.add_item(orwell()).unwrap();

    let err = lib
        .add_item(ItemDraft::new("Animal Farm", "Orwell", "ISBN-A"))
        .unwrap_err();
    assert_eq!(err, CatalogError::DuplicateKey("ISBN-A".to_string()));
    assert_eq!(lib.catalog().len(), 1);
    assert_eq!(lib.find_item("ISBN-A").unwrap().title(), "1984");
}

#[test]
fn empty_identifier_is_rejected() {
    let mut lib = Library::new();
    let err = lib.add_item(ItemDraft::new("Untitled", "Nobody", "")).unwrap_err();
    assert_eq!(err, CatalogError::EmptyKey);
    assert!(lib.catalog().is_empty());
}

#[test]
fn member_ids_are_sequential_from_first_id() {
    let mut lib = Library::new();
    let ids: Vec<_> = ["Alice", "Bob", "Alice"]
        .into_iter()
        .map(|name| lib.add_member(name).unwrap())
        .collect();

    assert_eq!(ids, vec![FIRST_MEMBER_ID, FIRST_MEMBER_ID + 1, FIRST_MEMBER_ID + 2]);
    assert_eq!(lib.next_member_id(), FIRST_MEMBER_ID + 3);
    let names: Vec<_> = lib.members().map(|m| m.name()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Alice"]);
}

#[test]
fn items_list_in_insertion_order_and_restart() {
    let mut lib = Library::new();
    for id in ["c", "a", "b"] {
        lib.add_item(ItemDraft::new("t", "a", id)).unwrap();
    }

    let iter = lib.items();
    let first: Vec<_> = iter.clone().map(|i| i.id()).collect();
    let second: Vec<_> = iter.map(|i| i.id()).collect();
    assert_eq!(first, vec!["c", "a", "b"]);
    assert_eq!(first, second);
}

#[test]
fn lending_scenario_walks_the_state_machine() {
    let mut lib = Library::new();
    lib.add_item(orwell()).unwrap();
    assert!(lib.add_item(orwell()).is_err());
    assert_eq!(lib.catalog().len(), 1);

    let alice = lib.add_member("Alice").unwrap();
    let bob = lib.add_member("Bob").unwrap();
    assert_eq!((alice, bob), (1001, 1002));

    lib.borrow("ISBN-A", alice).unwrap();
    assert_eq!(lib.find_item("ISBN-A").unwrap().state(), LendState::Borrowed);
    assert!(lib.find_member(alice).unwrap().holds("ISBN-A"));
    assert_eq!(lib.held_by("ISBN-A"), Some(alice));

    assert_eq!(
        lib.borrow("ISBN-A", bob),
        Err(LendingError::AlreadyBorrowed("ISBN-A".to_string()))
    );
    assert_eq!(
        lib.return_item("ISBN-A", bob),
        Err(LendingError::NotHeldByMember {
            item: "ISBN-A".to_string(),
            member: bob,
        })
    );

    lib.return_item("ISBN-A", alice).unwrap();
    assert_eq!(lib.find_item("ISBN-A").unwrap().state(), LendState::Available);
    assert!(lib.find_member(alice).unwrap().held_items().is_empty());
    assert_eq!(lib.held_by("ISBN-A"), None);
}

#[test]
fn rejected_transactions_mutate_nothing() {
    let mut lib = Library::new();
    lib.add_item(orwell()).unwrap();
    let alice = lib.add_member("Alice").unwrap();
    let bob = lib.add_member("Bob").unwrap();
    lib.borrow("ISBN-A", alice).unwrap();
    let before = lib.clone();

    assert!(lib.borrow("ISBN-A", bob).is_err());
    assert!(lib.return_item("ISBN-A", bob).is_err());
    assert!(lib.borrow("missing", alice).is_err());
    assert!(lib.return_item("ISBN-A", 9999).is_err());
    assert_eq!(lib, before);
}

#[test]
fn not_found_errors_check_item_before_member() {
    let mut lib = Library::new();
    lib.add_item(orwell()).unwrap();
    let alice = lib.add_member("Alice").unwrap();

    assert_eq!(
        lib.borrow("nope", 4242),
        Err(LendingError::ItemNotFound("nope".to_string()))
    );
    assert_eq!(lib.borrow("ISBN-A", 4242), Err(LendingError::MemberNotFound(4242)));
    assert_eq!(
        lib.return_item("nope", alice),
        Err(LendingError::ItemNotFound("nope".to_string()))
    );
    assert_eq!(
        lib.return_item("ISBN-A", 4242),
        Err(LendingError::MemberNotFound(4242))
    );
}

#[test]
fn returning_an_available_item_fails() {
    let mut lib = Library::new();
    lib.add_item(orwell()).unwrap();
    let alice = lib.add_member("Alice").unwrap();

    assert!(matches!(
        lib.return_item("ISBN-A", alice),
        Err(LendingError::NotHeldByMember { .. })
    ));
}

#[test]
fn borrow_then_return_restores_prior_state() {
    let mut lib = Library::new();
    lib.add_item(orwell()).unwrap();
    lib.add_item(ItemDraft::new("Dune", "Herbert", "ISBN-B")).unwrap();
    let alice = lib.add_member("Alice").unwrap();
    lib.borrow("ISBN-B", alice).unwrap();
    let before = lib.clone();

    lib.borrow("ISBN-A", alice).unwrap();
    assert_eq!(lib.find_member(alice).unwrap().borrowed_count(), 2);
    lib.return_item("ISBN-A", alice).unwrap();
    assert_eq!(lib, before);
}

#[test]
fn is_empty_tracks_items_and_members() {
    let mut lib = Library::new();
    assert!(lib.is_empty());
    lib.add_member("Alice").unwrap();
    assert!(!lib.is_empty());
}

#[test]
fn exhausted_member_counter_rejects_registration_without_wrapping() {
    let mut lib = Library::from_snapshot(LibrarySnapshotV1 {
        items: vec![],
        members: vec![],
        next_member_id: MemberId::MAX,
    })
    .unwrap();
    let before = lib.clone();

    assert_eq!(
        lib.add_member("a"),
        Err(RegistryError::IdsExhausted(MemberId::MAX))
    );
    assert_eq!(
        lib.add_member("b"),
        Err(RegistryError::IdsExhausted(MemberId::MAX))
    );
    assert_eq!(lib, before);
    assert_eq!(lib.next_member_id(), MemberId::MAX);
}

#[test]
fn last_member_id_before_the_limit_is_still_issued() {
    let mut lib = Library::from_snapshot(LibrarySnapshotV1 {
        items: vec![],
        members: vec![],
        next_member_id: MemberId::MAX - 1,
    })
    .unwrap();

    assert_eq!(lib.add_member("a"), Ok(MemberId::MAX - 1));
    assert!(lib.add_member("b").is_err());
    assert_eq!(lib.registry().len(), 1);
}
