// Unit tests for the editor reducer

use volume_discount_core::*;

fn draft_with_quantities(quantities: &[u32]) -> CampaignDraft {
    let config = EditorConfig {
        seed_quantities: quantities.to_vec(),
        ..EditorConfig::default()
    };
    CampaignDraft::seeded(&config)
}

fn update(index: usize, field: TierField) -> EditorAction {
    EditorAction::UpdateTier { index, field }
}

// ==================== Seeding Tests ====================

#[test]
fn test_new_draft_is_seeded_with_two_tiers() {
    let draft = CampaignDraft::new();

    assert!(draft.campaign_name.is_empty());
    assert!(draft.title.is_empty());
    assert!(draft.description.is_empty());
    assert_eq!(draft.tiers.len(), 2);
    assert_eq!(draft.tiers[0].quantity, 1);
    assert_eq!(draft.tiers[1].quantity, 2);
    for tier in &draft.tiers {
        assert_eq!(tier.discount_type, DiscountType::None);
        assert!(tier.title.is_empty());
        assert!(tier.amount.is_empty());
    }
}

#[test]
fn test_seeded_tiers_have_distinct_ids() {
    let draft = CampaignDraft::new();
    assert_ne!(draft.tiers[0].id, draft.tiers[1].id);
}

// ==================== Scalar Field Tests ====================

#[test]
fn test_set_scalar_fields() {
    let draft = CampaignDraft::new();
    let draft = apply(draft, EditorAction::SetCampaignName("Spring sale".into()));
    let draft = apply(draft, EditorAction::SetTitle("Buy more".into()));
    let draft = apply(draft, EditorAction::SetDescription("All shoes".into()));

    assert_eq!(draft.campaign_name, "Spring sale");
    assert_eq!(draft.title, "Buy more");
    assert_eq!(draft.description, "All shoes");
    assert_eq!(draft.tiers.len(), 2);
}

// ==================== AddTier Tests ====================

#[test]
fn test_add_tier_increments_last_quantity() {
    let draft = apply(CampaignDraft::new(), EditorAction::AddTier);

    assert_eq!(draft.tiers.len(), 3);
    assert_eq!(draft.tiers[2].quantity, 3);
    assert_eq!(draft.tiers[2].discount_type, DiscountType::None);
}

#[test]
fn test_add_tier_on_empty_list_starts_at_one() {
    let draft = apply(draft_with_quantities(&[]), EditorAction::AddTier);

    assert_eq!(draft.tiers.len(), 1);
    assert_eq!(draft.tiers[0].quantity, 1);
}

#[test]
fn test_add_tier_follows_edited_quantity() {
    let draft = apply(CampaignDraft::new(), update(1, TierField::Quantity("10".into())));
    let draft = apply(draft, EditorAction::AddTier);

    assert_eq!(draft.tiers[2].quantity, 11);
}

#[test]
fn test_add_tier_leaves_existing_tiers_unchanged() {
    let before = apply(CampaignDraft::new(), update(0, TierField::Title("First".into())));
    let after = apply(before.clone(), EditorAction::AddTier);

    assert_eq!(&after.tiers[..2], &before.tiers[..]);
}

// ==================== RemoveTier Tests ====================

#[test]
fn test_remove_middle_tier_shifts_later_tiers() {
    let mut draft = draft_with_quantities(&[1, 2, 3]);
    draft.apply(update(0, TierField::Title("a".into())));
    draft.apply(update(2, TierField::Title("c".into())));
    draft.apply(update(2, TierField::DiscountType(DiscountType::PercentOff)));
    draft.apply(update(2, TierField::Amount("15".into())));
    let first = draft.tiers[0].clone();
    let third = draft.tiers[2].clone();

    draft.apply(EditorAction::RemoveTier(1));

    assert_eq!(draft.tiers, vec![first, third]);
}

#[test]
fn test_remove_last_remaining_tier_leaves_empty_list() {
    let mut draft = draft_with_quantities(&[1]);
    draft.apply(EditorAction::RemoveTier(0));

    assert!(draft.tiers.is_empty());
}

#[test]
fn test_remove_out_of_range_is_noop() {
    let before = CampaignDraft::new();
    let after = apply(before.clone(), EditorAction::RemoveTier(2));

    assert_eq!(after, before);
}

#[test]
fn test_length_tracks_adds_and_removes() {
    let mut draft = CampaignDraft::new();
    let script = [
        EditorAction::AddTier,
        EditorAction::AddTier,
        EditorAction::RemoveTier(0),
        EditorAction::RemoveTier(3),
        EditorAction::AddTier,
        EditorAction::RemoveTier(1),
        EditorAction::RemoveTier(0),
        EditorAction::RemoveTier(0),
        EditorAction::RemoveTier(0),
    ];

    let mut expected = draft.tiers.len();
    for action in script {
        match action {
            EditorAction::AddTier => expected += 1,
            EditorAction::RemoveTier(index) if index < expected => expected -= 1,
            _ => {}
        }
        draft.apply(action);
        assert_eq!(draft.tiers.len(), expected);
    }
    assert_eq!(expected, 0);
}

// ==================== UpdateTier Tests ====================

#[test]
fn test_update_quantity_non_numeric_becomes_one() {
    let draft = apply(CampaignDraft::new(), update(1, TierField::Quantity("abc".into())));
    assert_eq!(draft.tiers[1].quantity, 1);
}

#[test]
fn test_update_quantity_parses_integer() {
    let draft = apply(CampaignDraft::new(), update(0, TierField::Quantity("25".into())));
    assert_eq!(draft.tiers[0].quantity, 25);
}

#[test]
fn test_update_amount_keeps_raw_string() {
    let draft = apply(CampaignDraft::new(), update(0, TierField::Amount("abc".into())));
    assert_eq!(draft.tiers[0].amount, "abc");
}

#[test]
fn test_update_touches_only_one_field_of_one_tier() {
    let before = CampaignDraft::new();
    let after = apply(before.clone(), update(1, TierField::Subtitle("Most popular".into())));

    assert_eq!(after.tiers[0], before.tiers[0]);
    assert_eq!(after.tiers[1].subtitle, "Most popular");
    assert_eq!(after.tiers[1].title, before.tiers[1].title);
    assert_eq!(after.tiers[1].label, before.tiers[1].label);
    assert_eq!(after.tiers[1].quantity, before.tiers[1].quantity);
    assert_eq!(after.tiers[1].id, before.tiers[1].id);
}

#[test]
fn test_update_every_field() {
    let mut draft = CampaignDraft::new();
    draft.apply(update(0, TierField::Title("Duo".into())));
    draft.apply(update(0, TierField::Subtitle("Pair up".into())));
    draft.apply(update(0, TierField::Label("Save 5$".into())));
    draft.apply(update(0, TierField::DiscountType(DiscountType::AmountOffEach)));
    draft.apply(update(0, TierField::Amount("5".into())));

    let tier = &draft.tiers[0];
    assert_eq!(tier.title, "Duo");
    assert_eq!(tier.subtitle, "Pair up");
    assert_eq!(tier.label, "Save 5$");
    assert_eq!(tier.discount_type, DiscountType::AmountOffEach);
    assert_eq!(tier.amount, "5");
}

#[test]
fn test_update_out_of_range_is_noop() {
    let before = CampaignDraft::new();
    let after = apply(before.clone(), update(5, TierField::Title("ghost".into())));

    assert_eq!(after, before);
}

// ==================== DiscountType Tests ====================

#[test]
fn test_discount_type_labels_round_trip() {
    for kind in DiscountType::ALL {
        assert_eq!(kind.label().parse::<DiscountType>(), Ok(kind));
    }
    assert!("Buy one get one".parse::<DiscountType>().is_err());
}

#[test]
fn test_discount_type_serializes_as_label() {
    let json = serde_json::to_value(DiscountType::PercentOff).unwrap();
    assert_eq!(json, serde_json::json!("% discount"));
}
