use crate::shared::*;

/// Populate the CostTable with the default money deltas.
///
/// Negative values are charged, positive values are paid out:
///   Land:   fence pen 1000, cropland 1500
///   Crops:  plant / harvest — corn 100/250, strawberry 150/350,
///           grape 200/450, tomato 120/300
///   Cattle: buy / daily — cow 600/100, sheep 400/50, chicken 150/30
///   Other:  runaway sheep damage 10 per tick, rent 300 every morning
pub fn populate_costs(table: &mut CostTable) {
    let rows: [(CostKey, i64); 18] = [
        (CostKey::FenceMake, -1_000),
        (CostKey::GroundMake, -1_500),
        (CostKey::CornPlant, -100),
        (CostKey::CornHarvest, 250),
        (CostKey::StrawberryPlant, -150),
        (CostKey::StrawberryHarvest, 350),
        (CostKey::GrapePlant, -200),
        (CostKey::GrapeHarvest, 450),
        (CostKey::TomatoPlant, -120),
        (CostKey::TomatoHarvest, 300),
        (CostKey::CowBuy, -600),
        (CostKey::CowDaily, 100),
        (CostKey::SheepBuy, -400),
        (CostKey::SheepDaily, 50),
        (CostKey::SheepDamage, -10),
        (CostKey::ChickenBuy, -150),
        (CostKey::ChickenDaily, 30),
        (CostKey::RentDaily, -300),
    ];

    table.entries.clear();
    table.entries.extend(rows);
}

/// Layer config overrides on top of whatever is already in the table.
pub fn apply_overrides(table: &mut CostTable, overrides: &std::collections::HashMap<CostKey, i64>) {
    for (key, value) in overrides {
        table.entries.insert(*key, *value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_a_row() {
        let mut table = CostTable::default();
        populate_costs(&mut table);
        for key in CostKey::ALL {
            assert!(table.entries.contains_key(&key), "{:?} has no row", key);
        }
    }

    #[test]
    fn test_costs_and_income_signs() {
        let mut table = CostTable::default();
        populate_costs(&mut table);
        for crop in [CropKind::Corn, CropKind::Grape, CropKind::Strawberry, CropKind::Tomato] {
            assert!(table.cost(CostKey::plant(crop)) < 0);
            assert!(table.cost(CostKey::harvest(crop)) > 0);
        }
        for cattle in [CattleKind::Chicken, CattleKind::Cow, CattleKind::Sheep] {
            assert!(table.cost(CostKey::buy(cattle)) < 0);
            assert!(table.cost(CostKey::daily(cattle)) > 0);
        }
        assert_eq!(table.cost(CostKey::RentDaily), -300);
        assert_eq!(table.cost(CostKey::GroundMake), -1_500);
        assert_eq!(table.cost(CostKey::CowBuy), -600);
    }

    #[test]
    fn test_overrides_replace_rows() {
        let mut table = CostTable::default();
        populate_costs(&mut table);
        let mut overrides = std::collections::HashMap::new();
        overrides.insert(CostKey::RentDaily, -500);
        apply_overrides(&mut table, &overrides);
        assert_eq!(table.cost(CostKey::RentDaily), -500);
        assert_eq!(table.cost(CostKey::CowDaily), 100);
    }
}
