//! Property tests for check result normalization.

use proptest::prelude::*;

use serde_json::{Map, Value};
use site_health::domain::entities::CheckDefinition;
use site_health::domain::ports::TestRegistry;
use site_health::{AsyncPolicy, HostSnapshot, ResultNormalizer};

#[derive(Debug, Clone)]
struct Check {
    id: String,
    is_async: bool,
    has_result: bool,
}

fn check_strategy() -> impl Strategy<Value = Check> {
    (
        proptest::string::string_regex("[a-z_]{1,12}").unwrap(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(id, is_async, has_result)| Check {
            id,
            is_async,
            has_result,
        })
}

fn snapshot_for(checks: &[Check]) -> String {
    let mut direct: Map<String, Value> = Map::new();
    let mut asynchronous: Map<String, Value> = Map::new();
    let mut results: Map<String, Value> = Map::new();

    for (i, check) in checks.iter().enumerate() {
        let key = format!("{}_{}", check.id, i);
        let item = serde_json::json!({ "label": format!("Check {}", i), "test": key });
        if check.is_async {
            asynchronous.insert(key.clone(), item);
        } else {
            direct.insert(key.clone(), item);
        }
        if check.has_result {
            results.insert(
                key.clone(),
                serde_json::json!({
                    "status": "good",
                    "label": key,
                    "test": key,
                    "badge": { "label": "Security" }
                }),
            );
        }
    }

    serde_json::json!({
        "tests": { "direct": direct, "async": asynchronous },
        "results": results,
    })
    .to_string()
}

fn definitions(snapshot: &HostSnapshot) -> Vec<CheckDefinition> {
    snapshot
        .tests()
        .unwrap()
        .into_iter()
        .flat_map(|group| group.definitions)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one row per definition, in definition order, whatever resolves.
    #[test]
    fn property_rows_match_definitions(
        checks in proptest::collection::vec(check_strategy(), 0..16),
        direct_policy in any::<bool>(),
    ) {
        let snapshot = HostSnapshot::from_json(&snapshot_for(&checks), "generated").unwrap();
        let definitions = definitions(&snapshot);
        let policy = if direct_policy { AsyncPolicy::Direct } else { AsyncPolicy::Skip };

        let rows = ResultNormalizer::new(&snapshot)
            .with_async_policy(policy)
            .normalize(&definitions)
            .unwrap();

        prop_assert_eq!(rows.len(), definitions.len());
        for (row, definition) in rows.iter().zip(&definitions) {
            prop_assert_eq!(&row.check, &definition.label);
        }
    }

    /// PROPERTY: only direct checks with a host result are resolved by default.
    #[test]
    fn property_resolved_rows_are_direct_with_results(
        checks in proptest::collection::vec(check_strategy(), 0..16),
    ) {
        let snapshot = HostSnapshot::from_json(&snapshot_for(&checks), "generated").unwrap();
        let rows = ResultNormalizer::new(&snapshot)
            .normalize(&definitions(&snapshot))
            .unwrap();

        let expected = checks.iter().filter(|c| !c.is_async && c.has_result).count();
        prop_assert_eq!(rows.iter().filter(|r| r.is_resolved()).count(), expected);
    }
}
