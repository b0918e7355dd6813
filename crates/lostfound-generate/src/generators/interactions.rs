//! Rows that tie users to items: reports, match candidates, comments and
//! alerts.

use rand::RngCore;

use lostfound_core::{AlertType, MatchStatus, ReportType, tables};

use crate::config::GenerateConfig;
use crate::errors::GenerationError;
use crate::generators::{EntityGenerator, GeneratorContext, Row, RowTarget, pick, pick_label};
use crate::value::SqlValue;

pub struct ReportsGenerator;

impl EntityGenerator for ReportsGenerator {
    fn table(&self) -> &'static str {
        tables::REPORTS
    }

    fn columns(&self) -> &'static [&'static str] {
        &["ItemID", "UserID", "ReportType", "ReportDate"]
    }

    fn row_target(&self, config: &GenerateConfig) -> RowTarget {
        RowTarget::Fixed(config.report_count)
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rows: u64,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Row>, GenerationError> {
        let mut out = Vec::with_capacity(rows as usize);
        for _ in 0..rows {
            let item = ctx.pick_id(tables::ITEMS, rng)?;
            let user = ctx.pick_id(tables::USERS, rng)?;
            let report_type = pick_label(ReportType::ALL, rng)?;
            let date = ctx.random_date(rng);
            out.push(vec![
                SqlValue::Int(item),
                SqlValue::Int(user),
                SqlValue::text(report_type.as_str()),
                SqlValue::Date(date),
            ]);
        }
        Ok(out)
    }
}

/// Pairs arbitrary items; the statuses of the two sides are not checked.
pub struct MatchesGenerator;

impl EntityGenerator for MatchesGenerator {
    fn table(&self) -> &'static str {
        tables::MATCHES
    }

    fn columns(&self) -> &'static [&'static str] {
        &["LostItemID", "FoundItemID", "MatchDate", "Status"]
    }

    fn row_target(&self, config: &GenerateConfig) -> RowTarget {
        RowTarget::Fixed(config.match_count)
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rows: u64,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Row>, GenerationError> {
        if rows == 0 {
            return Ok(Vec::new());
        }

        let items = ctx.row_count(tables::ITEMS)?;
        if items < 2 {
            return Err(GenerationError::InvalidConfig(format!(
                "cannot pair distinct items out of {items}"
            )));
        }

        let mut out = Vec::with_capacity(rows as usize);
        for _ in 0..rows {
            let lost = ctx.pick_id(tables::ITEMS, rng)?;
            let found = distinct_partner(lost, ctx.pick_id(tables::ITEMS, rng)?, items);
            let date = ctx.random_date(rng);
            let status = pick_label(MatchStatus::ALL, rng)?;
            out.push(vec![
                SqlValue::Int(lost),
                SqlValue::Int(found),
                SqlValue::Date(date),
                SqlValue::text(status.as_str()),
            ]);
        }
        Ok(out)
    }
}

/// Shift `found` to the next id (wrapping to 1) when it equals `lost`.
pub fn distinct_partner(lost: i64, found: i64, items: u64) -> i64 {
    if lost == found {
        found % items as i64 + 1
    } else {
        found
    }
}

pub struct CommentsGenerator;

impl EntityGenerator for CommentsGenerator {
    fn table(&self) -> &'static str {
        tables::COMMENTS
    }

    fn columns(&self) -> &'static [&'static str] {
        &["ItemID", "UserID", "CommentText", "CommentDate"]
    }

    fn row_target(&self, config: &GenerateConfig) -> RowTarget {
        RowTarget::Fixed(config.comment_count)
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rows: u64,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Row>, GenerationError> {
        let mut out = Vec::with_capacity(rows as usize);
        for _ in 0..rows {
            let item = ctx.pick_id(tables::ITEMS, rng)?;
            let user = ctx.pick_id(tables::USERS, rng)?;
            let text = pick(&ctx.config.pools.comments, "comments", rng)?;
            let date = ctx.random_date(rng);
            out.push(vec![
                SqlValue::Int(item),
                SqlValue::Int(user),
                SqlValue::text(text),
                SqlValue::Date(date),
            ]);
        }
        Ok(out)
    }
}

pub struct AlertsGenerator;

impl EntityGenerator for AlertsGenerator {
    fn table(&self) -> &'static str {
        tables::ALERTS
    }

    fn columns(&self) -> &'static [&'static str] {
        &["ItemID", "UserID", "AlertDate", "AlertType", "Message", "IsRead"]
    }

    fn row_target(&self, config: &GenerateConfig) -> RowTarget {
        RowTarget::Fixed(config.alert_count)
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rows: u64,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Row>, GenerationError> {
        let mut out = Vec::with_capacity(rows as usize);
        for _ in 0..rows {
            let item = ctx.pick_id(tables::ITEMS, rng)?;
            let user = ctx.pick_id(tables::USERS, rng)?;
            let date = ctx.random_date(rng);
            let alert_type = pick_label(AlertType::ALL, rng)?;
            let is_read = pick_label(&[false, true], rng)?;
            out.push(vec![
                SqlValue::Int(item),
                SqlValue::Int(user),
                SqlValue::Date(date),
                SqlValue::text(alert_type.as_str()),
                SqlValue::text(format!("Alert regarding item {item}")),
                SqlValue::Bool(is_read),
            ]);
        }
        Ok(out)
    }
}
