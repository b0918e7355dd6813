use rand::seq::index;
use rand::{Rng, RngCore};

use lostfound_core::{ADMIN_ROLE_ID, REGULAR_ROLE_ID, tables};

use crate::config::{EMAIL_SUFFIX_MAX, GenerateConfig};
use crate::errors::GenerationError;
use crate::generators::{EntityGenerator, GeneratorContext, Row, RowTarget, pick};
use crate::value::SqlValue;

pub struct UsersGenerator;

impl EntityGenerator for UsersGenerator {
    fn table(&self) -> &'static str {
        tables::USERS
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Name", "Contact", "Location", "RoleID", "Email"]
    }

    fn row_target(&self, config: &GenerateConfig) -> RowTarget {
        RowTarget::Fixed(config.user_count)
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rows: u64,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Row>, GenerationError> {
        let pools = &ctx.config.pools;
        let space = ctx.config.email_space();
        if rows > space {
            return Err(GenerationError::InvalidConfig(format!(
                "cannot issue {rows} unique emails from a space of {space}"
            )));
        }

        // Sampling without replacement over (first, last, suffix) keeps
        // every email distinct without retrying on collisions.
        let identities = index::sample(rng, space as usize, rows as usize);

        let mut out = Vec::with_capacity(rows as usize);
        for (position, candidate) in identities.iter().enumerate() {
            let identity = EmailIdentity::from_index(
                candidate as u64,
                pools.first_names.len() as u64,
                pools.last_names.len() as u64,
            );
            let first = &pools.first_names[identity.first];
            let last = &pools.last_names[identity.last];

            let contact = random_contact(rng);
            let city = pick(&pools.cities, "cities", rng)?;
            let role = if (position as u64) < ctx.config.admin_count {
                ADMIN_ROLE_ID
            } else {
                REGULAR_ROLE_ID
            };

            out.push(vec![
                SqlValue::text(format!("{first} {last}")),
                SqlValue::text(contact),
                SqlValue::text(city),
                SqlValue::Int(role),
                SqlValue::text(email_address(first, last, identity.suffix)),
            ]);
        }

        Ok(out)
    }
}

/// One point of the email candidate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmailIdentity {
    pub first: usize,
    pub last: usize,
    pub suffix: u64,
}

impl EmailIdentity {
    /// Decode a flat index in `0..first_len * last_len * EMAIL_SUFFIX_MAX`.
    pub fn from_index(index: u64, first_len: u64, last_len: u64) -> Self {
        let suffix = index % EMAIL_SUFFIX_MAX + 1;
        let pair = index / EMAIL_SUFFIX_MAX;
        Self {
            first: (pair / last_len.max(1)) as usize % first_len.max(1) as usize,
            last: (pair % last_len.max(1)) as usize,
            suffix,
        }
    }
}

pub fn email_address(first: &str, last: &str, suffix: u64) -> String {
    format!(
        "{}{}{}@gmail.com",
        first.to_lowercase(),
        last.to_lowercase(),
        suffix
    )
}

fn random_contact(rng: &mut dyn RngCore) -> String {
    if rng.random_bool(0.5) {
        format!("+91-{}", rng.random_range(7_000_000_000_u64..=9_999_999_999))
    } else {
        format!("+92-{}", rng.random_range(3_000_000_000_u64..=3_999_999_999))
    }
}

pub struct NotificationSettingsGenerator;

impl EntityGenerator for NotificationSettingsGenerator {
    fn table(&self) -> &'static str {
        tables::NOTIFICATION_SETTINGS
    }

    fn columns(&self) -> &'static [&'static str] {
        &["UserID", "EmailAlerts", "SMSAlerts", "PushAlerts"]
    }

    fn row_target(&self, _config: &GenerateConfig) -> RowTarget {
        RowTarget::PerParent(tables::USERS)
    }

    fn generate(
        &self,
        _ctx: &GeneratorContext<'_>,
        rows: u64,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Row>, GenerationError> {
        Ok((1..=rows)
            .map(|user_id| {
                vec![
                    SqlValue::Int(user_id as i64),
                    SqlValue::Bool(true),
                    SqlValue::Bool(rng.random_bool(0.5)),
                    SqlValue::Bool(true),
                ]
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::foreign::InMemoryForeignContext;

    fn generate_users(config: &GenerateConfig, seed: u64) -> Vec<Row> {
        let foreign = InMemoryForeignContext::new();
        let ctx = GeneratorContext {
            config,
            foreign: &foreign,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        UsersGenerator
            .generate(&ctx, config.user_count, &mut rng)
            .expect("generate users")
    }

    #[test]
    fn identity_decoding_covers_the_space() {
        let first_len = 3;
        let last_len = 2;
        let mut seen = HashSet::new();
        for index in 0..first_len * last_len * EMAIL_SUFFIX_MAX {
            let identity = EmailIdentity::from_index(index, first_len, last_len);
            assert!(identity.first < first_len as usize);
            assert!(identity.last < last_len as usize);
            assert!((1..=EMAIL_SUFFIX_MAX).contains(&identity.suffix));
            assert!(seen.insert(identity));
        }
    }

    #[test]
    fn emails_stay_unique_when_space_is_exhausted() {
        let mut config = GenerateConfig::default();
        config.pools.first_names = vec!["Sai".to_string()];
        config.pools.last_names = vec!["Nair".to_string()];
        config.user_count = EMAIL_SUFFIX_MAX;
        config.admin_count = 0;

        let rows = generate_users(&config, 9);
        let emails: HashSet<&str> = rows.iter().filter_map(|row| row[4].as_str()).collect();
        assert_eq!(emails.len(), EMAIL_SUFFIX_MAX as usize);
    }

    #[test]
    fn first_users_are_admins() {
        let config = GenerateConfig {
            user_count: 12,
            admin_count: 5,
            ..GenerateConfig::default()
        };
        let rows = generate_users(&config, 4);
        let roles: Vec<i64> = rows.iter().filter_map(|row| row[3].as_i64()).collect();
        assert_eq!(roles[..5], [ADMIN_ROLE_ID; 5]);
        assert!(roles[5..].iter().all(|role| *role == REGULAR_ROLE_ID));
    }

    #[test]
    fn email_matches_name_and_contact_has_country_prefix() {
        let config = GenerateConfig {
            user_count: 50,
            ..GenerateConfig::default()
        };
        for row in generate_users(&config, 21) {
            let name = row[0].as_str().expect("name");
            let email = row[4].as_str().expect("email");
            let compact: String = name.split(' ').collect::<String>().to_lowercase();
            assert!(email.starts_with(&compact), "{email} vs {name}");
            assert!(email.ends_with("@gmail.com"));

            let contact = row[1].as_str().expect("contact");
            let (prefix, number) = contact.split_at(4);
            let number: u64 = number.parse().expect("numeric contact");
            match prefix {
                "+91-" => assert!((7_000_000_000..=9_999_999_999).contains(&number)),
                "+92-" => assert!((3_000_000_000..=3_999_999_999).contains(&number)),
                other => panic!("unexpected prefix {other}"),
            }
        }
    }

    #[test]
    fn notification_settings_cover_each_user_once() {
        let config = GenerateConfig::default();
        let foreign = InMemoryForeignContext::new();
        let ctx = GeneratorContext {
            config: &config,
            foreign: &foreign,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let rows = NotificationSettingsGenerator
            .generate(&ctx, 25, &mut rng)
            .expect("generate settings");

        let ids: Vec<i64> = rows.iter().filter_map(|row| row[0].as_i64()).collect();
        assert_eq!(ids, (1..=25).collect::<Vec<_>>());
        assert!(rows.iter().all(|row| row[1] == SqlValue::Bool(true)));
        assert!(rows.iter().all(|row| row[3] == SqlValue::Bool(true)));
    }
}
