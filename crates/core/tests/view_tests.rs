// ═══════════════════════════════════════════════════════════════════
// View Tests — ViewState transitions, TypeSet, MaxAmount, clamping
// ═══════════════════════════════════════════════════════════════════

use account_charts_core::models::account::AccountType;
use account_charts_core::models::view::{
    clamp_start_row, MaxAmount, TypeSet, ViewEvent, ViewState, DEFAULT_ROWS_NUM,
};

fn state() -> ViewState {
    ViewState::default()
}

// ═══════════════════════════════════════════════════════════════════
//  TypeSet
// ═══════════════════════════════════════════════════════════════════

mod type_set {
    use super::*;

    #[test]
    fn profit_loss_pair() {
        let set = TypeSet::profit_loss();
        assert!(set.contains(AccountType::Income));
        assert!(set.contains(AccountType::Expense));
        assert!(!set.contains(AccountType::Assets));
        assert!(!set.contains(AccountType::Liabilities));
    }

    #[test]
    fn balance_sheet_pair() {
        let set = TypeSet::balance_sheet();
        assert!(set.contains(AccountType::Assets));
        assert!(set.contains(AccountType::Liabilities));
        assert!(!set.contains(AccountType::Income));
    }

    #[test]
    fn only_one_type() {
        let set = TypeSet::only(AccountType::Expense);
        assert!(set.contains(AccountType::Expense));
        assert_eq!(set.iter().count(), 1);
    }

    #[test]
    fn set_equality_ignores_order() {
        let a = TypeSet::of(&[AccountType::Income, AccountType::Expense]);
        let b = TypeSet::of(&[AccountType::Expense, AccountType::Income]);
        assert_eq!(a, b);
    }

    #[test]
    fn duplicates_collapse() {
        let set = TypeSet::of(&[AccountType::Income, AccountType::Income]);
        assert_eq!(set.iter().count(), 1);
    }

    #[test]
    fn default_is_profit_loss() {
        assert_eq!(TypeSet::default(), TypeSet::profit_loss());
    }

    #[test]
    fn empty_set() {
        assert!(TypeSet::of(&[]).is_empty());
        assert!(!TypeSet::profit_loss().is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ViewState defaults
// ═══════════════════════════════════════════════════════════════════

mod defaults {
    use super::*;

    #[test]
    fn default_state() {
        let s = state();
        assert_eq!(s.start_row, 0);
        assert_eq!(s.rows_num, DEFAULT_ROWS_NUM);
        assert_eq!(s.filter_account_id, None);
        assert_eq!(s.show_types, TypeSet::profit_loss());
        assert_eq!(s.max_amount, MaxAmount::Auto);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ShowTypes transitions
// ═══════════════════════════════════════════════════════════════════

mod show_types {
    use super::*;

    #[test]
    fn change_replaces_the_set() {
        let next = state()
            .apply(&ViewEvent::ShowTypes(TypeSet::balance_sheet()))
            .unwrap();
        assert_eq!(next.show_types, TypeSet::balance_sheet());
    }

    #[test]
    fn change_clears_the_drill_down() {
        let mut s = state();
        s.filter_account_id = Some(2);

        let next = s
            .apply(&ViewEvent::ShowTypes(TypeSet::balance_sheet()))
            .unwrap();
        assert_eq!(next.filter_account_id, None);
    }

    #[test]
    fn equal_set_is_a_noop() {
        let mut s = state();
        s.filter_account_id = Some(2);

        // the no-op must leave the drill-down alone
        assert!(s.apply(&ViewEvent::ShowTypes(TypeSet::profit_loss())).is_none());
        assert_eq!(s.filter_account_id, Some(2));
    }

    #[test]
    fn empty_set_is_a_noop() {
        assert!(state().apply(&ViewEvent::ShowTypes(TypeSet::of(&[]))).is_none());
    }

    #[test]
    fn change_keeps_the_window_and_scale() {
        let mut s = state();
        s.start_row = 7;
        s.max_amount = MaxAmount::Fixed(100.0);

        let next = s
            .apply(&ViewEvent::ShowTypes(TypeSet::only(AccountType::Income)))
            .unwrap();
        assert_eq!(next.start_row, 7);
        assert_eq!(next.max_amount, MaxAmount::Fixed(100.0));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  DrillDown transitions
// ═══════════════════════════════════════════════════════════════════

mod drill_down {
    use super::*;

    #[test]
    fn set_and_clear() {
        let drilled = state().apply(&ViewEvent::DrillDown(Some(5))).unwrap();
        assert_eq!(drilled.filter_account_id, Some(5));

        let cleared = drilled.apply(&ViewEvent::DrillDown(None)).unwrap();
        assert_eq!(cleared.filter_account_id, None);
    }

    #[test]
    fn same_target_is_a_noop() {
        let drilled = state().apply(&ViewEvent::DrillDown(Some(5))).unwrap();
        assert!(drilled.apply(&ViewEvent::DrillDown(Some(5))).is_none());
        assert!(state().apply(&ViewEvent::DrillDown(None)).is_none());
    }

    #[test]
    fn keeps_show_types() {
        let drilled = state().apply(&ViewEvent::DrillDown(Some(5))).unwrap();
        assert_eq!(drilled.show_types, TypeSet::profit_loss());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Window transitions
// ═══════════════════════════════════════════════════════════════════

mod window {
    use super::*;

    #[test]
    fn scrolls_within_bounds() {
        let next = state()
            .apply(&ViewEvent::Window {
                start_row: 30,
                dataset_len: 100,
            })
            .unwrap();
        assert_eq!(next.start_row, 30);
    }

    #[test]
    fn clamps_to_the_tail() {
        let next = state()
            .apply(&ViewEvent::Window {
                start_row: 95,
                dataset_len: 100,
            })
            .unwrap();
        assert_eq!(next.start_row, 88);
    }

    #[test]
    fn unchanged_start_is_a_noop() {
        assert!(state()
            .apply(&ViewEvent::Window {
                start_row: 0,
                dataset_len: 100,
            })
            .is_none());
    }

    #[test]
    fn clamped_to_unchanged_is_a_noop() {
        let mut s = state();
        s.start_row = 88;
        assert!(s
            .apply(&ViewEvent::Window {
                start_row: 999,
                dataset_len: 100,
            })
            .is_none());
    }

    #[test]
    fn short_dataset_pins_to_zero() {
        assert!(state()
            .apply(&ViewEvent::Window {
                start_row: 4,
                dataset_len: 5,
            })
            .is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  MaxAmount transitions
// ═══════════════════════════════════════════════════════════════════

mod max_amount {
    use super::*;

    #[test]
    fn fixed_value_disables_auto() {
        let next = state()
            .apply(&ViewEvent::MaxAmount(MaxAmount::Fixed(250_000.0)))
            .unwrap();
        assert_eq!(next.max_amount, MaxAmount::Fixed(250_000.0));
    }

    #[test]
    fn auto_restores_auto_scaling() {
        let fixed = state()
            .apply(&ViewEvent::MaxAmount(MaxAmount::Fixed(250_000.0)))
            .unwrap();
        let auto = fixed.apply(&ViewEvent::MaxAmount(MaxAmount::Auto)).unwrap();
        assert_eq!(auto.max_amount, MaxAmount::Auto);
    }

    #[test]
    fn equal_mode_is_a_noop() {
        assert!(state().apply(&ViewEvent::MaxAmount(MaxAmount::Auto)).is_none());

        let fixed = state()
            .apply(&ViewEvent::MaxAmount(MaxAmount::Fixed(100.0)))
            .unwrap();
        assert!(fixed
            .apply(&ViewEvent::MaxAmount(MaxAmount::Fixed(100.0)))
            .is_none());
    }

    #[test]
    fn different_fixed_values_transition() {
        let fixed = state()
            .apply(&ViewEvent::MaxAmount(MaxAmount::Fixed(100.0)))
            .unwrap();
        let changed = fixed
            .apply(&ViewEvent::MaxAmount(MaxAmount::Fixed(200.0)))
            .unwrap();
        assert_eq!(changed.max_amount, MaxAmount::Fixed(200.0));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  clamp_start_row
// ═══════════════════════════════════════════════════════════════════

mod clamping {
    use super::*;

    #[test]
    fn window_always_fits_the_dataset() {
        for (start, len, rows, expected) in [
            (0, 100, 12, 0),
            (88, 100, 12, 88),
            (89, 100, 12, 88),
            (40, 12, 12, 0),
            (40, 5, 12, 0),
            (0, 0, 12, 0),
        ] {
            assert_eq!(clamp_start_row(start, len, rows), expected);
        }
    }
}
