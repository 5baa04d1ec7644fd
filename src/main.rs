use std::path::Path;

use tracing::{error, info};

use storefront::{
    Cart, CursorSlot, ItemCatalog, PlayerInventory, ShopRegistry, ShopSystem, execute_buy,
    modified_price,
};

// ============================================================================
// Demo Session
// ============================================================================
//
// Loads the data files and walks one scripted shop visit, logging each step.
// Handy for eyeballing the pricing and placement behavior without a UI.

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("storefront=info".parse().unwrap()),
        )
        .init();

    let data_dir = Path::new("data");

    let mut catalog = ItemCatalog::new();
    if let Err(e) = catalog.load_from_directory(data_dir) {
        error!("Failed to load item catalog: {}", e);
        return;
    }

    let mut shops = ShopRegistry::new();
    if let Err(e) = shops.load_from_directory(data_dir) {
        error!("Failed to load shop registry: {}", e);
        return;
    }

    let Some(shop_def) = shops.get("general_store") else {
        error!("Shop 'general_store' not found");
        return;
    };
    let mut shop = ShopSystem::from_definition(shop_def, &catalog);
    info!("Opened '{}' with {} gold", shop_def.display_name, shop.gold());

    let mut player = PlayerInventory::new(4, 12);
    player.inventory_mut().gain_gold(100);

    // Fill a cart with everything we can afford one unit at a time.
    let mut cart = Cart::new();
    for slot in shop.slots() {
        let Some(item) = slot.item() else { continue };
        let unit_price = modified_price(item, 1, shop.buy_markup());
        if cart.total() + unit_price <= player.gold() {
            info!("Adding {} to cart at {} gold", item.display_name, unit_price);
            cart.add(&item.clone(), unit_price);
        }
    }

    match execute_buy(&mut shop, player.inventory_mut(), &cart) {
        Ok(()) => info!(
            "Bought {} line(s), player now has {} gold",
            cart.lines().len(),
            player.gold()
        ),
        Err(e) => error!("Purchase rejected: {}", e),
    }

    // Shuffle the first purchase around with the cursor for good measure.
    let mut cursor = CursorSlot::new();
    if !player.inventory().slot(0).is_empty() {
        let last = player.inventory().size() - 1;
        player.inventory_mut().slot_clicked(0, &mut cursor, false);
        player.inventory_mut().slot_clicked(last, &mut cursor, false);
        info!("Moved first purchase to the last backpack slot");
    }

    for (index, slot) in player.inventory().slots().iter().enumerate() {
        if let Some(item) = slot.item() {
            info!("[{}] {} x{}", index, item.display_name, slot.quantity());
        }
    }
}
