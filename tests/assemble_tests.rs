//! End-to-end tests of the public assembly API over the built-in catalog.

use wgsl_stitch::{combined_source, registry, source, ResolveError, SOURCE_SEPARATOR};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn lookup_is_idempotent() {
    init_logging();
    for name in ["hash21", "tonemap_aces", "specular_cook_torrance"] {
        let first = combined_source(&[name]).expect("assembles");
        let second = combined_source(&[name]).expect("assembles");
        assert_eq!(first, second);
    }
}

#[test]
fn dependency_chain_assembles_to_exact_concatenation() {
    init_logging();
    // fbm_value_2d -> value_noise_2d -> hash21 is a pure three-link chain.
    let expected = format!(
        "{}{SOURCE_SEPARATOR}{}{SOURCE_SEPARATOR}{}",
        source("hash21").expect("hash21 exists"),
        source("value_noise_2d").expect("value_noise_2d exists"),
        source("fbm_value_2d").expect("fbm_value_2d exists"),
    );
    let combined = combined_source(&["fbm_value_2d"]).expect("assembles");
    assert_eq!(combined, expected);
}

#[test]
fn direct_dependency_source_is_included() {
    init_logging();
    let combined = combined_source(&["sd_rounded_box"]).expect("assembles");
    assert!(combined.contains(source("sd_box").expect("sd_box exists")));
}

#[test]
fn transitive_dependencies_are_included() {
    init_logging();
    let combined = combined_source(&["specular_cook_torrance"]).expect("assembles");
    for dep in [
        "distribution_ggx",
        "geometry_smith",
        "geometry_schlick_ggx",
        "fresnel_schlick",
        "specular_cook_torrance",
    ] {
        assert!(
            combined.contains(&format!("fn {dep}(")),
            "missing definition of {dep}"
        );
    }
}

#[test]
fn shared_dependency_is_emitted_once_before_both_users() {
    init_logging();
    // perlin_noise_2d and simplex_noise_2d both require hash22.
    let combined =
        combined_source(&["perlin_noise_2d", "simplex_noise_2d"]).expect("assembles");

    assert_eq!(combined.matches("fn hash22(").count(), 1);
    let hash = combined.find("fn hash22(").expect("hash22 defined");
    let perlin = combined.find("fn perlin_noise_2d(").expect("perlin defined");
    let simplex = combined
        .find("fn simplex_noise_2d(")
        .expect("simplex defined");
    assert!(hash < perlin);
    assert!(hash < simplex);
}

#[test]
fn requesting_a_dependency_first_does_not_duplicate_or_misorder() {
    init_logging();
    let forward = combined_source(&["sd_box", "sd_rounded_box"]).expect("assembles");
    let reverse = combined_source(&["sd_rounded_box", "sd_box"]).expect("assembles");
    assert_eq!(forward, reverse);
    assert_eq!(forward.matches("fn sd_box(").count(), 1);
    let base = forward.find("fn sd_box(").expect("sd_box defined");
    let rounded = forward
        .find("fn sd_rounded_box(")
        .expect("sd_rounded_box defined");
    assert!(base < rounded);
}

#[test]
fn every_edge_in_the_catalog_is_ordered_dependency_first() {
    init_logging();
    let registry = registry();
    let names: Vec<&str> = registry.names().collect();
    let combined = combined_source(&names).expect("whole catalog assembles");

    for name in registry.names() {
        let entry = registry.lookup(name).expect("enumerated name exists");
        let dependent = combined
            .find(&format!("fn {name}("))
            .expect("definition present");
        for dep in entry.dependencies() {
            let dependency = combined
                .find(&format!("fn {dep}("))
                .expect("dependency definition present");
            assert!(
                dependency < dependent,
                "{dep} must be defined before {name}"
            );
        }
    }
}

#[test]
fn empty_request_yields_empty_string() {
    init_logging();
    assert_eq!(combined_source(&[]).expect("assembles"), "");
}

#[test]
fn unknown_function_failure_names_the_function() {
    init_logging();
    let err = combined_source(&["curl_noise_4d"]).expect_err("not in the catalog");
    assert_eq!(err, ResolveError::UnknownFunction("curl_noise_4d".to_owned()));
    assert!(err.to_string().contains("curl_noise_4d"));

    let err = source("curl_noise_4d").expect_err("not in the catalog");
    assert!(err.to_string().contains("curl_noise_4d"));
}

#[test]
fn fragments_are_separated_by_a_blank_line() {
    init_logging();
    let combined = combined_source(&["ease_in_bounce"]).expect("assembles");
    let expected = format!(
        "{}{SOURCE_SEPARATOR}{}",
        source("ease_out_bounce").expect("ease_out_bounce exists"),
        source("ease_in_bounce").expect("ease_in_bounce exists"),
    );
    assert_eq!(combined, expected);
}

#[test]
fn raw_constant_and_source_lookup_agree() {
    init_logging();
    assert_eq!(
        source("simplex_noise_2d").expect("exists"),
        wgsl_stitch::library::noise::SIMPLEX_NOISE_2D
    );
}

#[test]
fn registry_enumeration_exposes_the_whole_catalog() {
    init_logging();
    let registry = registry();
    assert!(!registry.is_empty());
    assert_eq!(registry.names().count(), registry.len());
    assert!(registry.names().any(|n| n == "voronoi_2d"));
    assert!(registry.contains("rotate2d"));
    assert!(!registry.contains("rotate4d"));
}
