//! Query subcommands of the `dex` binary.

use anyhow::Result;
use clap::Subcommand;
use serde_json::Value;
use tracing::{debug, warn};

use dex_core::QueryError;
use dex_runtime::DexStore;

use crate::views::{
    BreakdownView, ComparisonView, ListView, MatchupView, Placeholder, ProfileView, RecordView,
};

#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List creature keys in dataset order
    List,

    /// Show one creature with its stat bars
    Show {
        /// Creature name (case-insensitive)
        name: String,
    },

    /// Compare creatures on the radar and total-score charts
    Compare {
        /// Creature names; defaults to the configured comparison set
        names: Vec<String>,
    },

    /// Show which categories a creature is weak, resistant or immune to
    Profile {
        /// Creature name (case-insensitive)
        name: String,
    },

    /// Count creatures per primary and secondary category
    Breakdown,

    /// Look up one matchup matrix cell
    Matchup {
        attacker: String,
        defender: String,
    },
}

impl Command {
    /// Run the query and convert its result into JSON.
    pub fn execute(&self, store: &DexStore) -> Result<Value> {
        debug!(command = ?self, "executing query");
        match self {
            Command::List => to_value(&ListView { keys: store.keys() }),
            Command::Show { name } => to_value(&RecordView::new(store.get_by_key(name)?)),
            Command::Compare { names } => {
                let records = if names.is_empty() {
                    store.default_comparison()
                } else {
                    store.get_by_keys(names)
                };
                to_value(&ComparisonView::new(store, &records))
            }
            Command::Profile { name } => {
                let record = store.get_by_key(name)?;
                to_value(&ProfileView {
                    key: &record.key,
                    categories: &record.categories,
                    profile: store.effectiveness_profile(record),
                })
            }
            Command::Breakdown => to_value(&BreakdownView {
                groups: store.category_breakdown(),
            }),
            Command::Matchup { attacker, defender } => {
                let multiplier = store.matchup(attacker, defender)?;
                to_value(&MatchupView {
                    attacker: attacker.trim().to_lowercase(),
                    defender: defender.trim().to_lowercase(),
                    multiplier,
                    value: multiplier.value(),
                })
            }
        }
    }

    /// Like [`Command::execute`], but a missing creature or category yields a
    /// [`Placeholder`] instead of an error.
    pub fn render(&self, store: &DexStore) -> Result<Value> {
        let err = match self.execute(store) {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        match err.downcast::<QueryError>() {
            Ok(QueryError::NotFound(missing) | QueryError::CategoryNotFound(missing)) => {
                warn!(%missing, "lookup found nothing");
                to_value(&Placeholder { missing })
            }
            Ok(other) => Err(other.into()),
            Err(err) => Err(err),
        }
    }
}

fn to_value<T: serde::Serialize>(view: &T) -> Result<Value> {
    Ok(serde_json::to_value(view)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dex_content::ContentFactory;

    fn store() -> DexStore {
        DexStore::load(&ContentFactory::new(ContentFactory::bundled_data_dir())).unwrap()
    }

    #[test]
    fn show_includes_stat_bars() {
        let value = Command::Show {
            name: "Bulbasaur".into(),
        }
        .execute(&store())
        .unwrap();
        assert_eq!(value["key"], "bulbasaur");
        assert_eq!(value["total"], 318);
        assert_eq!(value["stat_bars"].as_array().map(Vec::len), Some(6));
        assert_eq!(value["stat_bars"][0]["stat"], "hp");
    }

    #[test]
    fn compare_defaults_to_configured_set() {
        let value = Command::Compare { names: vec![] }.execute(&store()).unwrap();
        assert_eq!(
            value["keys"],
            serde_json::json!(["bulbasaur", "charmander", "squirtle"])
        );
        assert_eq!(value["radar"].as_array().map(Vec::len), Some(18));
        assert_eq!(value["totals"][2]["total"], 314);
    }

    #[test]
    fn compare_drops_unknown_names() {
        let value = Command::Compare {
            names: vec!["squirtle".into(), "agumon".into(), "Bulbasaur".into()],
        }
        .execute(&store())
        .unwrap();
        assert_eq!(value["keys"], serde_json::json!(["bulbasaur", "squirtle"]));
    }

    #[test]
    fn missing_lookup_renders_placeholder() {
        let store = store();
        let show = Command::Show {
            name: "Agumon".into(),
        };
        let err = show.execute(&store).unwrap_err();
        assert_eq!(
            err.downcast_ref::<QueryError>(),
            Some(&QueryError::NotFound("agumon".into()))
        );
        assert_eq!(
            show.render(&store).unwrap(),
            serde_json::json!({ "missing": "agumon" })
        );

        let matchup = Command::Matchup {
            attacker: "fire".into(),
            defender: "shadow".into(),
        };
        assert_eq!(
            matchup.render(&store).unwrap(),
            serde_json::json!({ "missing": "shadow" })
        );
    }

    #[test]
    fn matchup_and_profile() {
        let store = store();
        let value = Command::Matchup {
            attacker: "Water".into(),
            defender: "fire".into(),
        }
        .execute(&store)
        .unwrap();
        assert_eq!(value["multiplier"], "double");
        assert_eq!(value["value"], 2.0);

        let value = Command::Profile {
            name: "charmander".into(),
        }
        .execute(&store)
        .unwrap();
        let weak = value["weak"].as_array().unwrap();
        assert!(weak.contains(&serde_json::json!("grass")));
    }

    #[test]
    fn list_and_breakdown() {
        let store = store();
        let list = Command::List.execute(&store).unwrap();
        assert_eq!(list["keys"][0], "bulbasaur");

        let breakdown = Command::Breakdown.execute(&store).unwrap();
        assert_eq!(breakdown["groups"][0]["primary"], "grass");
        assert_eq!(breakdown["groups"][0]["count"], 3);
    }
}
