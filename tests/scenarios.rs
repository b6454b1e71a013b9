use chrono::Utc;
use stretcher_core::{
    config::EngineConfig,
    decompose::decompose,
    error::Error,
    expand,
    lengths::LengthCatalog,
    models::{
        demand::{ComponentKey, DemandLine},
        frame::{ComponentKind, FrameType},
        frame_requirement::{FrameRequirement, FrameStatus},
        inventory::InventorySnapshot,
        supplier_product::SupplierProduct,
    },
    num,
    reorder,
    stock,
};

fn requirement(id: &str, width: u32, height: u32, quantity: u64) -> FrameRequirement {
    let now = Utc::now();
    FrameRequirement::builder()
        .id(id)
        .order_item_id(format!("item-{}", id))
        .width(width)
        .height(height)
        .quantity(quantity)
        .active(true)
        .created(now.clone())
        .updated(now)
        .build()
        .unwrap()
}

fn product(id: &str, sku: &str, supplier: &str, key: ComponentKey, price: rust_decimal::Decimal) -> SupplierProduct {
    let now = Utc::now();
    SupplierProduct::builder()
        .id(id)
        .sku(sku)
        .supplier(supplier)
        .kind(key.kind())
        .frame_type(key.frame_type())
        .length(key.length())
        .unit_price(price)
        .active(true)
        .created(now.clone())
        .updated(now)
        .build()
        .unwrap()
}

#[test]
fn thick_unbraced_canvas() {
    let config = EngineConfig::default();
    let bill = decompose(&config, &LengthCatalog::standard(), 100, 70).unwrap();
    assert_eq!(bill.frame_type(), FrameType::Thick);
    assert_eq!(bill.crossbars(), 0);

    let lines = expand::expand(&[(bill, 5)]);
    assert_eq!(lines.len(), 2);
    assert!(lines.contains(&DemandLine::new(ComponentKey::stretcher(FrameType::Thick, 100), 10)));
    assert!(lines.contains(&DemandLine::new(ComponentKey::stretcher(FrameType::Thick, 70), 10)));
    assert!(lines.iter().all(|line| line.kind() == ComponentKind::Stretcher));
}

#[test]
fn braced_canvas() {
    let config = EngineConfig::default();
    let bill = decompose(&config, &LengthCatalog::standard(), 150, 100).unwrap();
    assert_eq!(bill.frame_type(), FrameType::Thick);
    assert_eq!(bill.crossbars(), 1);
    assert_eq!(bill.crossbar_length(), Some(100));

    let lines = expand::expand(&[(bill, 1)]);
    assert_eq!(lines, vec![
        DemandLine::new(ComponentKey::stretcher(FrameType::Thick, 100), 2),
        DemandLine::new(ComponentKey::stretcher(FrameType::Thick, 150), 2),
        DemandLine::new(ComponentKey::crossbar(100), 1),
    ]);
}

#[test]
fn deficit_to_purchase_order() {
    let key = ComponentKey::stretcher(FrameType::Thick, 100);
    let snapshot = InventorySnapshot::new().with_level(key, 5, 0);
    let check = stock::check(&[DemandLine::new(key, 10)], &snapshot);
    let result = check.results()[0];
    assert!(!result.available());
    assert_eq!(result.deficit(), 5);

    let catalog = vec![product("sp-1", "STB-THICK-100", "woodco", key, num!(30))];
    let config = EngineConfig::default();
    let suggestions = reorder::plan(check.results(), &catalog, config.buffer_ratio()).unwrap();
    assert_eq!(suggestions[0].order_quantity(), 6);
    assert_eq!(suggestions[0].total_price(), Some(num!(180)));

    let plan = reorder::draft_orders(&suggestions, &Utc::now());
    assert_eq!(plan.orders().len(), 1);
    assert_eq!(plan.orders()[0].total(), num!(180));
    assert!(plan.manual_sourcing().is_empty());
}

#[test]
fn requirement_batch_end_to_end() {
    let config = EngineConfig::default();
    let lengths = LengthCatalog::standard();
    let mut mounted = requirement("fr-4", 150, 100, 10);
    mounted.set_frame_status(FrameStatus::Mounted);
    let requirements = vec![
        requirement("fr-1", 100, 70, 5),
        requirement("fr-2", 150, 100, 1),
        requirement("fr-3", 0, 100, 1),
        mounted,
    ];
    let demand = expand::from_requirements(&config, &lengths, &requirements);
    assert_eq!(demand.rejected().len(), 1);
    assert_eq!(demand.rejected()[0].1, Error::InvalidDimensions { width: 0, height: 100 });

    let snapshot = InventorySnapshot::new()
        .with_level(ComponentKey::stretcher(FrameType::Thick, 100), 20, 5)
        .with_level(ComponentKey::stretcher(FrameType::Thick, 70), 4, 5)
        .with_level(ComponentKey::stretcher(FrameType::Thick, 150), 2, 0);
    let check = stock::check(demand.lines(), &snapshot);
    assert!(!check.all_available());
    // 6 short on the 70s, 1 crossbar never stocked
    assert_eq!(check.total_deficit(), 7);
    assert_eq!(stock::low_stock(&snapshot).len(), 1);

    let catalog = vec![
        product("sp-1", "STB-THICK-70", "woodco", ComponentKey::stretcher(FrameType::Thick, 70), num!(22)),
    ];
    let suggestions = reorder::plan(check.results(), &catalog, config.buffer_ratio()).unwrap();
    let plan = reorder::draft_orders(&suggestions, &Utc::now());
    assert_eq!(plan.orders().len(), 1);
    assert_eq!(plan.orders()[0].lines()[0].order_quantity(), 8);
    assert_eq!(plan.manual_sourcing().len(), 1);
    assert_eq!(plan.manual_sourcing()[0].line().key(), ComponentKey::crossbar(100));
}

#[test]
fn concurrent_callers_see_the_same_answer() {
    let snapshot = std::sync::Arc::new(
        InventorySnapshot::new().with_level(ComponentKey::stretcher(FrameType::Thick, 100), 7, 0)
    );
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let snapshot = snapshot.clone();
            std::thread::spawn(move || {
                let bill = decompose(&EngineConfig::default(), &LengthCatalog::standard(), 100, 70).unwrap();
                let lines = expand::expand(&[(bill, 2)]);
                stock::check(&lines, &snapshot)
            })
        })
        .collect();
    let checks: Vec<_> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();
    for check in &checks {
        assert_eq!(check, &checks[0]);
        // nothing is reserved: every caller sees the same 7 in stock
        assert_eq!(check.total_deficit(), 4);
    }
}
