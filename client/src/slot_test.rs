use super::*;

#[test]
fn slot_id_round_trips_through_attribute_text() {
    let slot = SlotId(7);
    assert_eq!(SlotId::parse(&slot.to_string()), Some(slot));
}

#[test]
fn slot_id_parse_tolerates_whitespace() {
    assert_eq!(SlotId::parse(" 3 "), Some(SlotId(3)));
}

#[test]
fn slot_id_parse_rejects_garbage() {
    assert_eq!(SlotId::parse(""), None);
    assert_eq!(SlotId::parse("-1"), None);
    assert_eq!(SlotId::parse("stat-1"), None);
}

#[test]
fn slot_index_is_inner_value() {
    assert_eq!(SlotId(4).index(), 4);
}

#[test]
fn selectors_match_page_markup() {
    assert_eq!(STAT_SELECTOR, ".stat");
    assert_eq!(STAT_VALUE_SELECTOR, "h3");
    assert_eq!(HERO_SELECTOR, ".hero-title");
    assert!(SLOT_ATTR.starts_with("data-"));
    assert!(CONFIG_ATTR.starts_with("data-"));
}

// =============================================================================
// SlotPlan
// =============================================================================

#[test]
fn plan_numbers_stats_in_document_order() {
    let plan = SlotPlan::new(3, false);
    assert_eq!(plan.stats, vec![SlotId(0), SlotId(1), SlotId(2)]);
    assert_eq!(plan.hero, None);
    assert_eq!(plan.len(), 3);
}

#[test]
fn plan_puts_hero_after_stats() {
    let plan = SlotPlan::new(2, true);
    assert_eq!(plan.hero, Some(SlotId(2)));
    assert_eq!(plan.len(), 3);
}

#[test]
fn plan_with_only_hero_uses_slot_zero() {
    let plan = SlotPlan::new(0, true);
    assert!(plan.stats.is_empty());
    assert_eq!(plan.hero, Some(SlotId(0)));
}

#[test]
fn empty_page_plans_no_slots() {
    assert!(SlotPlan::new(0, false).is_empty());
}
