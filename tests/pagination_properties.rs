//! Property tests for the pagination laws

use proptest::prelude::*;
use relay_connections::pagination::{
    decode_cursor, encode_cursor, paginate, BinarySearch, PaginationArgs, Paginator,
};
use relay_connections::User;
use std::collections::BTreeSet;

/// Sorted, unique users with arbitrary (sparse) ids
fn sorted_users() -> impl Strategy<Value = Vec<User>> {
    prop::collection::btree_set(0u64..500, 0..40)
        .prop_map(|ids: BTreeSet<u64>| ids.into_iter().map(User::with_id).collect())
}

/// A cursor that may or may not point into the sequence
fn cursor_for(users: &[User], pick: Option<prop::sample::Index>, fallback: u64) -> String {
    match pick {
        Some(index) if !users.is_empty() => encode_cursor(users[index.index(users.len())].id),
        Some(_) => encode_cursor(fallback),
        None => "not a cursor".to_string(),
    }
}

proptest! {
    #[test]
    fn forward_count_is_min_of_first_and_remaining(
        users in sorted_users(),
        first in 0i64..60,
        pick in prop::option::of(any::<prop::sample::Index>()),
        fallback in 500u64..1000,
    ) {
        let after = cursor_for(&users, pick, fallback);
        let page = paginate(&users, &PaginationArgs::forward(first, after.clone())).unwrap();

        let remaining = match decode_cursor(&after).and_then(|id| users.iter().position(|u| u.id == id)) {
            Some(index) => users.len() - index - 1,
            None => users.len(),
        };
        prop_assert_eq!(page.len(), (first as usize).min(remaining));
        prop_assert_eq!(page.page_info.has_next_page, (first as usize) < remaining);
    }

    #[test]
    fn backward_count_is_min_of_last_and_preceding(
        users in sorted_users(),
        last in 0i64..60,
        pick in prop::option::of(any::<prop::sample::Index>()),
        fallback in 500u64..1000,
    ) {
        let before = cursor_for(&users, pick, fallback);
        let page = paginate(&users, &PaginationArgs::backward(last, before.clone())).unwrap();

        let preceding = match decode_cursor(&before).and_then(|id| users.iter().position(|u| u.id == id)) {
            Some(index) => index,
            None => users.len(),
        };
        prop_assert_eq!(page.len(), (last as usize).min(preceding));
        prop_assert_eq!(page.page_info.has_previous_page, (last as usize) < preceding);
    }

    #[test]
    fn edges_preserve_order_and_cursor_bounds(
        users in sorted_users(),
        count in 0i64..60,
        pick in prop::option::of(any::<prop::sample::Index>()),
        backward in any::<bool>(),
    ) {
        let cursor = cursor_for(&users, pick, 999);
        let args = if backward {
            PaginationArgs::backward(count, cursor)
        } else {
            PaginationArgs::forward(count, cursor)
        };
        let page = paginate(&users, &args).unwrap();

        let ids: Vec<u64> = page.nodes().map(|u| u.id).collect();
        prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(page.page_info.start_cursor.clone(), page.edges.first().map(|e| e.cursor.clone()));
        prop_assert_eq!(page.page_info.end_cursor.clone(), page.edges.last().map(|e| e.cursor.clone()));
    }

    #[test]
    fn binary_lookup_agrees_with_linear(
        users in sorted_users(),
        count in 0i64..20,
        id in 0u64..600,
    ) {
        let linear = Paginator::new();
        let binary = Paginator::new().with_lookup(BinarySearch);

        let forward = PaginationArgs::forward(count, encode_cursor(id));
        prop_assert_eq!(
            linear.paginate(&users, &forward).unwrap(),
            binary.paginate(&users, &forward).unwrap()
        );

        let backward = PaginationArgs::backward(count, encode_cursor(id));
        prop_assert_eq!(
            linear.paginate(&users, &backward).unwrap(),
            binary.paginate(&users, &backward).unwrap()
        );
    }

    #[test]
    fn paginate_is_idempotent(users in sorted_users(), count in 0i64..20, id in 0u64..600) {
        let args = PaginationArgs::forward(count, encode_cursor(id));
        prop_assert_eq!(paginate(&users, &args).unwrap(), paginate(&users, &args).unwrap());
    }

    #[test]
    fn cursor_round_trip(id in any::<u64>()) {
        let cursor = encode_cursor(id);
        prop_assert_eq!(decode_cursor(&cursor), Some(id));
        prop_assert_eq!(encode_cursor(decode_cursor(&cursor).unwrap()), cursor);
    }

    #[test]
    fn decode_never_panics(input in any::<String>()) {
        let _ = decode_cursor(&input);
    }

    #[test]
    fn decode_never_panics_on_base64_alphabet(input in "[A-Za-z0-9+/=]{0,48}") {
        let _ = decode_cursor(&input);
    }

    #[test]
    fn negative_counts_are_rejected(count in i64::MIN..0, backward in any::<bool>()) {
        let users = relay_connections::types::seed_users(3);
        let args = if backward {
            PaginationArgs::backward(count, "")
        } else {
            PaginationArgs::forward(count, "")
        };
        let err = paginate(&users, &args).unwrap_err();
        prop_assert!(err.is_client_error());
    }
}
