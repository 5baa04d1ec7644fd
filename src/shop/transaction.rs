use thiserror::Error;
use tracing::info;

use super::cart::Cart;
use super::system::ShopSystem;
use crate::inventory::Inventory;

// ============================================================================
// Transactions
// ============================================================================

/// Why a buy or sell was rejected. Every variant is recoverable at the call
/// site; the cart is left intact so the user can adjust it and retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransactionError {
    #[error("not enough gold: need {needed}, have {available}")]
    InsufficientFunds { needed: i32, available: i32 },
    #[error("not enough room in the inventory for the full purchase")]
    CapacityExceeded,
}

/// Apply a purchase cart against a shop and a player inventory.
///
/// Both preconditions are checked before anything mutates, so a rejected
/// buy leaves every slot and both gold balances exactly as they were. Items
/// are added to the player one unit at a time, letting a single cart line
/// top off a partial stack and spill into a fresh slot — the same placement
/// the capacity simulation assumed.
pub fn execute_buy(
    shop: &mut ShopSystem,
    player: &mut Inventory,
    cart: &Cart,
) -> Result<(), TransactionError> {
    let total = cart.total();

    if player.gold() < total {
        return Err(TransactionError::InsufficientFunds {
            needed: total,
            available: player.gold(),
        });
    }

    let requests = cart.lines().iter().map(|line| (&line.item, line.quantity));
    if !player.simulate_add_batch(requests) {
        return Err(TransactionError::CapacityExceeded);
    }

    for line in cart.lines() {
        shop.remove_stock(&line.item, line.quantity);
        for _ in 0..line.quantity {
            player.add_item(&line.item, 1);
        }
    }

    player.spend_gold(total);
    shop.gain_gold(total);

    info!("Purchase complete: {} line(s) for {} gold", cart.lines().len(), total);
    Ok(())
}

/// Apply a sell cart: items move from the player into shop stock, gold moves
/// the other way. Rejected without mutation when the shop cannot cover the
/// total — a shop's balance never goes negative.
pub fn execute_sell(
    shop: &mut ShopSystem,
    player: &mut Inventory,
    cart: &Cart,
) -> Result<(), TransactionError> {
    let total = cart.total();

    if shop.gold() < total {
        return Err(TransactionError::InsufficientFunds {
            needed: total,
            available: shop.gold(),
        });
    }

    for line in cart.lines() {
        shop.add_stock(&line.item, line.quantity);
        player.remove_item(&line.item, line.quantity);
    }

    player.gain_gold(total);
    shop.spend_gold(total);

    info!("Sale complete: {} line(s) for {} gold", cart.lines().len(), total);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ItemDefinition;
    use crate::shop::cart::modified_price;
    use std::sync::Arc;

    fn potion() -> Arc<ItemDefinition> {
        Arc::new(ItemDefinition {
            id: 0,
            display_name: "Potion".to_string(),
            description: String::new(),
            icon: "item_potion".to_string(),
            max_stack: 10,
            gold_value: 10,
        })
    }

    #[test]
    fn test_buy_three_potions() {
        let potion = potion();
        let mut shop = ShopSystem::new(1, 0, 0.2, -0.2);
        shop.add_stock(&potion, 5);

        let mut player = Inventory::new(4);
        player.gain_gold(100);

        let mut cart = Cart::new();
        for _ in 0..3 {
            cart.add(&potion, modified_price(&potion, 1, shop.buy_markup()));
        }
        assert_eq!(cart.total(), 36);

        execute_buy(&mut shop, &mut player, &cart).unwrap();

        assert_eq!(shop.stock_of(&potion), 2);
        assert_eq!(shop.gold(), 36);
        assert_eq!(player.gold(), 64);
        assert_eq!(player.total_of(&potion), 3);
    }

    #[test]
    fn test_buy_rejected_on_gold_leaves_state_alone() {
        let potion = potion();
        let mut shop = ShopSystem::new(1, 50, 0.2, -0.2);
        shop.add_stock(&potion, 5);

        let mut player = Inventory::new(4);
        player.gain_gold(10);

        let mut cart = Cart::new();
        cart.add(&potion, 12);
        cart.add(&potion, 12);

        let err = execute_buy(&mut shop, &mut player, &cart).unwrap_err();
        assert_eq!(
            err,
            TransactionError::InsufficientFunds {
                needed: 24,
                available: 10
            }
        );

        assert_eq!(shop.stock_of(&potion), 5);
        assert_eq!(shop.gold(), 50);
        assert_eq!(player.gold(), 10);
        assert_eq!(player.total_of(&potion), 0);
    }

    #[test]
    fn test_buy_rejected_when_inventory_cannot_take_cart() {
        let potion = potion();
        let brick = Arc::new(ItemDefinition {
            id: 1,
            display_name: "Brick".to_string(),
            description: String::new(),
            icon: "item_brick".to_string(),
            max_stack: 1,
            gold_value: 1,
        });

        let mut shop = ShopSystem::new(1, 0, 0.2, -0.2);
        shop.add_stock(&potion, 5);

        // Every slot occupied by full single-unit stacks: nothing fits.
        let mut player = Inventory::new(2);
        player.add_item(&brick, 1);
        let brick2 = Arc::new(ItemDefinition { id: 2, ..(*brick).clone() });
        player.add_item(&brick2, 1);
        player.gain_gold(100);

        let mut cart = Cart::new();
        cart.add(&potion, 12);

        let err = execute_buy(&mut shop, &mut player, &cart).unwrap_err();
        assert_eq!(err, TransactionError::CapacityExceeded);

        assert_eq!(shop.stock_of(&potion), 5);
        assert_eq!(player.gold(), 100);
        assert_eq!(player.total_of(&potion), 0);
    }

    #[test]
    fn test_sell_rejected_when_shop_cannot_pay() {
        let potion = potion();
        let mut shop = ShopSystem::new(1, 5, 0.2, -0.2);

        let mut player = Inventory::new(4);
        player.add_item(&potion, 3);

        let mut cart = Cart::new();
        let unit = modified_price(&potion, 1, shop.sell_markup());
        cart.add(&potion, unit);
        cart.add(&potion, unit);

        let err = execute_sell(&mut shop, &mut player, &cart).unwrap_err();
        assert_eq!(
            err,
            TransactionError::InsufficientFunds {
                needed: 16,
                available: 5
            }
        );

        assert_eq!(player.total_of(&potion), 3);
        assert_eq!(player.gold(), 0);
        assert_eq!(shop.gold(), 5);
        assert_eq!(shop.stock_of(&potion), 0);
    }

    #[test]
    fn test_sell_moves_items_and_gold() {
        let potion = potion();
        let mut shop = ShopSystem::new(1, 100, 0.2, -0.2);

        let mut player = Inventory::new(4);
        player.add_item(&potion, 3);

        let mut cart = Cart::new();
        let unit = modified_price(&potion, 1, shop.sell_markup());
        assert_eq!(unit, 8);
        cart.add(&potion, unit);
        cart.add(&potion, unit);

        execute_sell(&mut shop, &mut player, &cart).unwrap();

        assert_eq!(player.total_of(&potion), 1);
        assert_eq!(player.gold(), 16);
        assert_eq!(shop.stock_of(&potion), 2);
        assert_eq!(shop.gold(), 84);
    }
}
