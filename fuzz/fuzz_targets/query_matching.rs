// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query matching.
//!
//! Arbitrary titles, descriptions and queries, including case-folding edge
//! cases where lowercasing changes byte length (`İ`, `ẞ`). The matcher must
//! never panic, never exceed the cap, and never reorder.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use unisearch::testing::{make_article, make_catalog_item, make_section};
use unisearch::{build_index, match_query, refine, Category, ContentSources, Locale, RawLabels, CAP};

#[derive(Debug, Arbitrary)]
struct Input {
    programs: Vec<(String, String)>,
    links: Vec<String>,
    articles: Vec<(String, String)>,
    query: String,
    extension: String,
}

fuzz_target!(|input: Input| {
    let links: Vec<(String, String)> = input
        .links
        .iter()
        .take(32)
        .enumerate()
        .map(|(i, label)| (label.clone(), format!("/p/{}", i)))
        .collect();
    let link_refs: Vec<(&str, &str)> = links.iter().map(|(l, h)| (l.as_str(), h.as_str())).collect();

    let sources = ContentSources {
        catalog: input
            .programs
            .iter()
            .take(32)
            .enumerate()
            .map(|(i, (name, desc))| make_catalog_item(&i.to_string(), name, desc))
            .collect(),
        navigation: vec![make_section("Section", &link_refs)],
        articles: input
            .articles
            .iter()
            .take(32)
            .enumerate()
            .map(|(i, (title, excerpt))| make_article(&i.to_string(), title, excerpt))
            .collect(),
    };

    let en = Locale::new("en");
    let index = build_index(&sources, &en, &en, &RawLabels).expect("positional ids are unique");
    let results = match_query(&index, &input.query);

    for category in Category::ALL {
        let bucket = results.get(category);
        assert!(bucket.len() <= CAP);
        assert!(bucket.iter().all(|e| e.category == category));
        let positions: Vec<usize> = bucket
            .iter()
            .map(|e| index.entries.iter().position(|x| x.id == e.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    if input.query.trim().is_empty() {
        assert!(results.is_empty());
    }

    let longer = format!("{}{}", input.query, input.extension);
    if let Some(refined) = refine(&results, &input.query, &longer) {
        assert_eq!(refined, match_query(&index, &longer));
    }
});
