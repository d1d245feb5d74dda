//! Letter of Agreement overlay merging

use crate::types::{Feature, Loa, Replacement, Rule};
use log::warn;

/// Merge LOA overlays into a copy of the base airspace collection
///
/// Per overlay and area, in order: the `add` features are appended (each
/// stamped with the LOA rule), then each `replace` entry swaps the volume
/// carrying its `id` for the replacement volumes. An empty replacement
/// geometry deletes the volume, and a feature left without volumes is
/// removed entirely. A `replace` whose `id` matches nothing is logged and
/// skipped; overlays are maintained separately from the base data and a
/// stale reference must not block the rest of the merge.
///
/// The inputs are never mutated.
pub fn merge_loa(airspace: &[Feature], loas: &[Loa]) -> Vec<Feature> {
    let mut merged = airspace.to_vec();

    for loa in loas {
        for area in &loa.areas {
            for feature in &area.add {
                let mut feature = feature.clone();
                let rules = feature.rules.get_or_insert_with(Vec::new);
                if !rules.contains(&Rule::Loa) {
                    rules.push(Rule::Loa);
                }
                merged.push(feature);
            }

            for replacement in &area.replace {
                apply_replacement(&mut merged, replacement);
            }
        }
    }

    merged
}

fn apply_replacement(merged: &mut Vec<Feature>, replacement: &Replacement) {
    let Some((feature_idx, volume_idx)) = find_volume(merged, &replacement.id) else {
        warn!(
            "no volume with id {:?} in airspace, skipping replacement",
            replacement.id
        );
        return;
    };

    let feature = &mut merged[feature_idx];
    feature.geometry.remove(volume_idx);
    feature.geometry.extend(replacement.geometry.iter().cloned());

    if feature.geometry.is_empty() {
        merged.remove(feature_idx);
    }
}

/// Locate a volume by id, returning its feature and volume indices
fn find_volume(features: &[Feature], id: &str) -> Option<(usize, usize)> {
    features.iter().enumerate().find_map(|(feature_idx, feature)| {
        feature
            .geometry
            .iter()
            .position(|volume| volume.id.as_deref() == Some(id))
            .map(|volume_idx| (feature_idx, volume_idx))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> Vec<Feature> {
        serde_json::from_value(json!([
            {
                "name": "FOOBAR",
                "type": "CTR",
                "geometry": [{
                    "id": "foobar",
                    "lower": "SFC",
                    "upper": "2000 ft",
                    "boundary": [
                        {"circle": {"centre": "513654N 0010545W", "radius": "2 nm"}}
                    ]
                }]
            },
            {
                "name": "BARFOO",
                "type": "CTA",
                "geometry": [
                    {
                        "id": "barfoo-1",
                        "lower": "2000 ft",
                        "upper": "FL065",
                        "boundary": [
                            {"circle": {"centre": "513654N 0010545W", "radius": "5 nm"}}
                        ]
                    },
                    {
                        "id": "barfoo-2",
                        "lower": "FL065",
                        "upper": "FL105",
                        "boundary": [
                            {"circle": {"centre": "513654N 0010545W", "radius": "10 nm"}}
                        ]
                    }
                ]
            }
        ]))
        .unwrap()
    }

    fn loa(value: serde_json::Value) -> Vec<Loa> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn added_features_appear_with_loa_rule() {
        let loas = loa(json!([{
            "name": "LOA TEST",
            "areas": [{
                "add": [{
                    "name": "TEST BOX",
                    "type": "CTR",
                    "geometry": [{
                        "lower": "SFC",
                        "upper": "1000 ft",
                        "boundary": [
                            {"line": ["513654N 0010545W", "513654N 0010545W"]}
                        ]
                    }]
                }]
            }]
        }]));

        let merged = merge_loa(&base(), &loas);
        let names: Vec<_> = merged.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["FOOBAR", "BARFOO", "TEST BOX"]);

        let added = merged.last().unwrap();
        assert_eq!(added.rules.as_deref(), Some(&[Rule::Loa][..]));
    }

    #[test]
    fn replacing_with_empty_geometry_removes_the_feature() {
        let loas = loa(json!([{
            "name": "LOA TEST",
            "areas": [{
                "replace": [{"id": "foobar", "geometry": []}]
            }]
        }]));

        let merged = merge_loa(&base(), &loas);
        assert!(merged.iter().all(|f| f.name != "FOOBAR"));
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn replacement_volumes_are_spliced_in() {
        let loas = loa(json!([{
            "name": "LOA TEST",
            "areas": [{
                "replace": [{
                    "id": "barfoo-1",
                    "geometry": [{
                        "name": "SPECIAL",
                        "lower": "SFC",
                        "upper": "FL065",
                        "boundary": [
                            {"circle": {"centre": "513654N 0010545W", "radius": "3 nm"}}
                        ]
                    }]
                }]
            }]
        }]));

        let merged = merge_loa(&base(), &loas);
        let barfoo = merged.iter().find(|f| f.name == "BARFOO").unwrap();
        assert_eq!(barfoo.geometry.len(), 2);
        assert!(barfoo.geometry.iter().all(|v| v.id.as_deref() != Some("barfoo-1")));
        assert_eq!(barfoo.geometry.last().unwrap().name.as_deref(), Some("SPECIAL"));
    }

    #[test]
    fn missing_replacement_target_is_skipped() {
        let loas = loa(json!([{
            "name": "LOA TEST",
            "areas": [{
                "replace": [{"id": "no-such-volume", "geometry": []}]
            }]
        }]));

        let merged = merge_loa(&base(), &loas);
        assert_eq!(merged, base());
    }

    #[test]
    fn replace_can_target_a_volume_added_earlier() {
        let loas = loa(json!([{
            "name": "LOA TEST",
            "areas": [{
                "add": [{
                    "name": "TEST BOX",
                    "type": "CTR",
                    "geometry": [{
                        "id": "test-box",
                        "lower": "SFC",
                        "upper": "1000 ft",
                        "boundary": [
                            {"circle": {"centre": "513654N 0010545W", "radius": "1 nm"}}
                        ]
                    }]
                }],
                "replace": [{"id": "test-box", "geometry": []}]
            }]
        }]));

        let merged = merge_loa(&base(), &loas);
        assert!(merged.iter().all(|f| f.name != "TEST BOX"));
    }

    #[test]
    fn inputs_are_not_mutated() {
        let airspace = base();
        let loas = loa(json!([{
            "name": "LOA TEST",
            "areas": [{
                "replace": [{"id": "foobar", "geometry": []}]
            }]
        }]));

        let before = airspace.clone();
        let _ = merge_loa(&airspace, &loas);
        assert_eq!(airspace, before);
    }

    #[test]
    fn overlays_apply_in_order() {
        // The second overlay replaces the volume the first one spliced in
        let loas = loa(json!([
            {
                "name": "LOA ONE",
                "areas": [{
                    "replace": [{
                        "id": "foobar",
                        "geometry": [{
                            "id": "foobar-new",
                            "lower": "SFC",
                            "upper": "3000 ft",
                            "boundary": [
                                {"circle": {"centre": "513654N 0010545W", "radius": "2 nm"}}
                            ]
                        }]
                    }]
                }]
            },
            {
                "name": "LOA TWO",
                "areas": [{
                    "replace": [{"id": "foobar-new", "geometry": []}]
                }]
            }
        ]));

        let merged = merge_loa(&base(), &loas);
        assert!(merged.iter().all(|f| f.name != "FOOBAR"));
    }
}
