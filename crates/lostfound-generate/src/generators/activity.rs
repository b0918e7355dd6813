use rand::RngCore;

use lostfound_core::{ActivityAction, tables};

use crate::config::GenerateConfig;
use crate::errors::GenerationError;
use crate::generators::{EntityGenerator, GeneratorContext, Row, RowTarget, pick_label};
use crate::value::SqlValue;

const LOG_DESCRIPTION: &str = "User performed an action";

pub struct ActivityLogsGenerator;

impl EntityGenerator for ActivityLogsGenerator {
    fn table(&self) -> &'static str {
        tables::USER_ACTIVITY_LOGS
    }

    fn columns(&self) -> &'static [&'static str] {
        &["UserID", "ActionType", "ActionDate", "Description"]
    }

    fn row_target(&self, config: &GenerateConfig) -> RowTarget {
        RowTarget::Fixed(config.log_count)
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rows: u64,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Row>, GenerationError> {
        let mut out = Vec::with_capacity(rows as usize);
        for _ in 0..rows {
            let user = ctx.pick_id(tables::USERS, rng)?;
            let date = ctx.random_date(rng);
            let action = pick_label(ActivityAction::ALL, rng)?;
            out.push(vec![
                SqlValue::Int(user),
                SqlValue::text(action.as_str()),
                SqlValue::Date(date),
                SqlValue::text(LOG_DESCRIPTION),
            ]);
        }
        Ok(out)
    }
}
