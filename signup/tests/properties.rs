//! Property tests for field edits against the pure reducer

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use composable_mvi_core::reducer::Reducer;
use proptest::prelude::*;
use signup::{
    Field, FieldId, FormState, SignUpAction, SignUpConfig, SignUpEnvironment, SignUpIntent,
    SignUpReducer,
};

fn field_id() -> impl Strategy<Value = FieldId> {
    prop_oneof![
        Just(FieldId::FullName),
        Just(FieldId::Email),
        Just(FieldId::Password),
        Just(FieldId::ConfirmPassword),
    ]
}

fn edits() -> impl Strategy<Value = Vec<(FieldId, String)>> {
    prop::collection::vec((field_id(), "[a-z ]{0,6}"), 0..24)
}

fn update(field: FieldId, value: String) -> SignUpAction {
    SignUpIntent::UpdateField { field, value }.into()
}

fn apply_all(edits: &[(FieldId, String)]) -> FormState {
    let reducer = SignUpReducer::new();
    let env = SignUpEnvironment::new(&SignUpConfig::default());
    let mut state = FormState::default();
    for (field, value) in edits {
        let effects = reducer.reduce(&mut state, update(*field, value.clone()), &env);
        assert!(effects.iter().all(composable_mvi_core::Effect::is_none));
    }
    state
}

proptest! {
    #[test]
    fn last_edit_wins(edits in edits()) {
        let state = apply_all(&edits);

        for id in FieldId::ALL {
            let expected = edits
                .iter()
                .rev()
                .find(|(field, _)| *field == id)
                .map(|(_, value)| value.as_str());

            match expected {
                Some(value) => {
                    prop_assert_eq!(state.field(id).value.as_str(), value);
                    prop_assert_eq!(state.field(id).is_error, value.is_empty());
                },
                // Never edited: still pristine
                None => prop_assert_eq!(state.field(id), &Field::default()),
            }
        }
    }

    #[test]
    fn edits_never_toggle_loading(edits in edits()) {
        prop_assert!(!apply_all(&edits).is_loading);
    }

    #[test]
    fn edit_is_idempotent(edits in edits(), field in field_id(), value in "[a-z]{0,4}") {
        let reducer = SignUpReducer::new();
        let env = SignUpEnvironment::new(&SignUpConfig::default());

        let mut once = apply_all(&edits);
        let _ = reducer.reduce(&mut once, update(field, value.clone()), &env);
        let mut twice = once.clone();
        let _ = reducer.reduce(&mut twice, update(field, value), &env);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn edit_leaves_other_fields_alone(edits in edits(), field in field_id(), value in "[a-z]{0,4}") {
        let reducer = SignUpReducer::new();
        let env = SignUpEnvironment::new(&SignUpConfig::default());

        let before = apply_all(&edits);
        let mut after = before.clone();
        let _ = reducer.reduce(&mut after, update(field, value), &env);

        for id in FieldId::ALL.into_iter().filter(|id| *id != field) {
            prop_assert_eq!(after.field(id), before.field(id));
        }
    }
}
