use rand::{Rng, RngCore};

use lostfound_core::{ItemStatus, tables};

use crate::config::GenerateConfig;
use crate::errors::GenerationError;
use crate::generators::{EntityGenerator, GeneratorContext, Row, RowTarget, pick, pick_label};
use crate::value::SqlValue;

/// Chance that an item receives a tag.
const TAG_PROBABILITY: f64 = 0.7;

pub struct ItemsGenerator;

impl EntityGenerator for ItemsGenerator {
    fn table(&self) -> &'static str {
        tables::ITEMS
    }

    fn columns(&self) -> &'static [&'static str] {
        &[
            "ItemName",
            "Description",
            "UserID",
            "CategoryID",
            "ConditionID",
            "PriorityID",
            "LocationFoundOrLost",
            "Status",
            "DateReported",
            "ImageURL",
        ]
    }

    fn row_target(&self, config: &GenerateConfig) -> RowTarget {
        RowTarget::Fixed(config.item_count)
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rows: u64,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Row>, GenerationError> {
        let pools = &ctx.config.pools;
        let mut out = Vec::with_capacity(rows as usize);

        for _ in 0..rows {
            let name = pick(&pools.item_names, "item_names", rng)?;
            let description = pick(&pools.descriptions, "descriptions", rng)?;
            let owner = ctx.pick_id(tables::USERS, rng)?;
            let category = ctx.pick_id(tables::ITEM_CATEGORIES, rng)?;
            let condition = ctx.pick_id(tables::ITEM_CONDITIONS, rng)?;
            let priority = ctx.pick_id(tables::ITEM_PRIORITIES, rng)?;
            let location = ctx.pick_id(tables::LOCATIONS, rng)?;
            let status = pick_label(ItemStatus::GENERATED, rng)?;
            let reported = ctx.random_date(rng);

            out.push(vec![
                SqlValue::text(name),
                SqlValue::text(description),
                SqlValue::Int(owner),
                SqlValue::Int(category),
                SqlValue::Int(condition),
                SqlValue::Int(priority),
                SqlValue::Int(location),
                SqlValue::text(status.as_str()),
                SqlValue::Date(reported),
                SqlValue::Null,
            ]);
        }

        Ok(out)
    }
}

pub struct TagsGenerator;

impl EntityGenerator for TagsGenerator {
    fn table(&self) -> &'static str {
        tables::ITEM_TAGS
    }

    fn columns(&self) -> &'static [&'static str] {
        &["ItemID", "TagName"]
    }

    fn row_target(&self, _config: &GenerateConfig) -> RowTarget {
        RowTarget::PerParent(tables::ITEMS)
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rows: u64,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Row>, GenerationError> {
        let mut out = Vec::new();
        for item_id in 1..=rows {
            if rng.random_bool(TAG_PROBABILITY) {
                let tag = pick(&ctx.config.pools.tags, "tags", rng)?;
                out.push(vec![SqlValue::Int(item_id as i64), SqlValue::text(tag)]);
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use lostfound_core::REFERENCE_DATA;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::foreign::InMemoryForeignContext;

    fn seeded_context(users: u64) -> InMemoryForeignContext {
        let mut foreign = InMemoryForeignContext::new();
        for reference in REFERENCE_DATA {
            foreign.ingest_table(reference.table, reference.values.len() as u64);
        }
        foreign.ingest_table(tables::LOCATIONS, 57);
        foreign.ingest_table(tables::USERS, users);
        foreign
    }

    #[test]
    fn item_references_stay_in_range() {
        let config = GenerateConfig::default();
        let foreign = seeded_context(300);
        let ctx = GeneratorContext {
            config: &config,
            foreign: &foreign,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let rows = ItemsGenerator
            .generate(&ctx, 800, &mut rng)
            .expect("generate items");

        assert_eq!(rows.len(), 800);
        for row in &rows {
            let id = |idx: usize| row[idx].as_i64().expect("id column");
            assert!((1..=300).contains(&id(2)));
            assert!((1..=8).contains(&id(3)));
            assert!((1..=5).contains(&id(4)));
            assert!((1..=3).contains(&id(5)));
            assert!((1..=57).contains(&id(6)));

            let status = row[7].as_str().expect("status");
            assert!(matches!(status, "Lost" | "Found" | "Stolen"));
            assert!(config.date_window.contains(row[8].as_date().expect("date")));
            assert!(row[9].is_null());
        }
    }

    #[test]
    fn items_require_generated_users() {
        let config = GenerateConfig::default();
        let foreign = InMemoryForeignContext::new();
        let ctx = GeneratorContext {
            config: &config,
            foreign: &foreign,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let result = ItemsGenerator.generate(&ctx, 1, &mut rng);
        assert!(matches!(result, Err(GenerationError::MissingParent(_))));
    }

    #[test]
    fn tags_are_sparse_and_at_most_one_per_item() {
        let config = GenerateConfig::default();
        let foreign = InMemoryForeignContext::new();
        let ctx = GeneratorContext {
            config: &config,
            foreign: &foreign,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let rows = TagsGenerator
            .generate(&ctx, 800, &mut rng)
            .expect("generate tags");

        assert!(rows.len() < 800);
        assert!(rows.len() > 400);
        let ids: Vec<i64> = rows.iter().filter_map(|row| row[0].as_i64()).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(ids.iter().all(|id| (1..=800).contains(id)));
    }
}
