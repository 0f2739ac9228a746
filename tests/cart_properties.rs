use chrono::{TimeZone, Utc};
use local_storefront::{
    error::AppError,
    models::Product,
    services::{cart_service, order_service},
    state::ShopState,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(i64),
    Update(i64, i64),
    Remove(i64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1i64..=5).prop_map(Op::Add),
        ((1i64..=5), (-4i64..=4)).prop_map(|(id, delta)| Op::Update(id, delta)),
        (1i64..=5).prop_map(Op::Remove),
    ]
}

// Product 5 is not in the catalog; stocks are small so limits are hit often.
fn catalog() -> Vec<Product> {
    [(1, 0u32), (2, 1), (3, 2), (4, 5)]
        .into_iter()
        .map(|(id, stock)| Product {
            id,
            name: format!("p{id}"),
            price: id * 10,
            image_url: String::new(),
            category: "c".into(),
            description: "d".into(),
            stock,
        })
        .collect()
}

fn assert_cart_invariants(state: &ShopState) {
    for entry in &state.cart {
        assert!(entry.quantity > 0);
        let product = state.product(entry.product_id).expect("cart entry for known product");
        assert!(entry.quantity <= product.stock);
    }
    let mut ids: Vec<i64> = state.cart.iter().map(|e| e.product_id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), state.cart.len());
}

proptest! {
    #[test]
    fn cart_quantities_stay_positive_and_within_stock(ops in prop::collection::vec(op(), 0..40)) {
        let mut state = ShopState::new(catalog());
        for op in ops {
            let before = state.cart.clone();
            let result = match op {
                Op::Add(id) => cart_service::add_to_cart(&mut state, id).map(|_| ()),
                Op::Update(id, delta) => cart_service::update_quantity(&mut state, id, delta).map(|_| ()),
                Op::Remove(id) => {
                    cart_service::remove_from_cart(&mut state, id);
                    Ok(())
                }
            };
            if let Err(err) = result {
                prop_assert!(err.is_user_error());
                prop_assert_eq!(&state.cart, &before);
            }
            assert_cart_invariants(&state);
        }
    }

    #[test]
    fn add_at_limit_never_changes_cart(extra in 1usize..5) {
        let mut state = ShopState::new(catalog());
        for _ in 0..5 {
            cart_service::add_to_cart(&mut state, 4).unwrap();
        }
        let full = state.cart.clone();
        for _ in 0..extra {
            let err = cart_service::add_to_cart(&mut state, 4).unwrap_err();
            let is_stock_error = matches!(err, AppError::InsufficientStock { .. });
            prop_assert!(is_stock_error);
            prop_assert_eq!(&state.cart, &full);
        }
    }

    #[test]
    fn checkout_snapshots_cart_and_totals_live_prices(adds in prop::collection::vec(2i64..=4, 1..8)) {
        let mut state = ShopState::new(catalog());
        for id in adds {
            let _ = cart_service::add_to_cart(&mut state, id);
        }
        prop_assume!(!state.cart.is_empty());
        let cart = state.cart.clone();
        let expected: i64 = cart
            .iter()
            .map(|e| state.product(e.product_id).unwrap().price * i64::from(e.quantity))
            .sum();
        let orders_before = state.orders.len();

        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let order = order_service::checkout(&mut state, now).unwrap();

        prop_assert!(state.cart.is_empty());
        prop_assert_eq!(state.orders.len(), orders_before + 1);
        prop_assert_eq!(&order.items, &cart);
        prop_assert_eq!(order.total_amount, expected);
    }
}
