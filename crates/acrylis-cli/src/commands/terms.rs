use acrylis_core::error::AcrylisError;
use acrylis_core::model::Concern;
use acrylis_core::terms::{self, builtin};
use std::collections::BTreeMap;
use std::path::Path;

pub fn list() -> Result<(), AcrylisError> {
    println!("Built-in term lists:\n");
    for name in builtin::PRESETS {
        let list = builtin::load_preset(name)?;
        println!(
            "  {:<12} {} (v{}), {} terms",
            name,
            list.name,
            list.version,
            list.terms.len()
        );
        if let Some(ref desc) = list.description {
            println!("               {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), AcrylisError> {
    let list = builtin::load_preset(preset)?;

    println!("{} (version {})\n", list.name, list.version);
    if let Some(ref desc) = list.description {
        println!("{}\n", desc);
    }

    match list.concern {
        Concern::Acrylates => {
            println!("Each ingredient is checked in order; the first rule that applies decides it:\n");
            println!("  1. Exact false positive               -> ignored");
            println!("  2. Rosin/colophonium without 'acryl'  -> ignored");
            println!("  3. Exact term below                   -> Unsafe");
            println!("  4. Contains a substring trigger       -> Unsafe");
            println!("  5. polyurethane-N without 'acryl'     -> ignored");
            println!("  6. Unlisted polyquaternium-N          -> Unknown");
            println!("  7. Mentions 'resin'                   -> Unknown\n");
        }
        Concern::FungalAcne => {
            println!("Ingredients match exactly after parenthetical names are removed,");
            println!("e.g. \"Helianthus Annuus (Sunflower) Seed Oil\" -> \"helianthus annuus seed oil\".\n");
        }
    }

    // Group terms, keeping file order within each group
    let mut groups: BTreeMap<&str, Vec<(&str, &str)>> = BTreeMap::new();
    for def in &list.terms {
        groups
            .entry(def.group.as_deref().unwrap_or("Other"))
            .or_default()
            .push((def.term.as_str(), def.reason.as_str()));
    }

    let max_term_len = list.terms.iter().map(|d| d.term.len()).max().unwrap_or(20);

    for (group, entries) in &groups {
        println!("{} ({}):", group, entries.len());
        for (term, reason) in entries {
            println!("  {:<width$}  {}", term, reason, width = max_term_len);
        }
        println!();
    }

    if !list.false_positives.is_empty() {
        println!("False positives (never flagged):");
        for fp in &list.false_positives {
            println!("  {}", fp);
        }
        println!();
    }

    if !list.substring_triggers.is_empty() {
        println!("Substring triggers (checked in this order):");
        println!("  {}", list.substring_triggers.join(", "));
        println!();
    }

    Ok(())
}

pub fn schema() -> Result<(), AcrylisError> {
    print!(
        r#"JSON Term List Schema
=====================

A term list names the ingredients that are a problem for one concern.
When you run `acrylis classify`, each ingredient in the pasted list is
lowercased and compared against these terms.

Top-level fields:
  name          (string, required)  Human-readable name of the list
  description   (string, optional)  What this list screens for
  concern       (string, required)  "acrylates" or "fungal_acne"
  version       (string, required)  Version identifier (e.g., "2025.3")
  terms         (array, required)   Trigger ingredients (see below)
  false_positives
                (array, optional)   Lowercase names that look like triggers
                                    but are not. Exact match, never flagged.
                                    Acrylates only.
  substring_triggers
                (array, optional)   Lowercase fragments that flag an
                                    ingredient when no exact term matched.
                                    Checked in order; the first hit is named
                                    in the reason. Acrylates only.

Each entry in the "terms" array:
  term          (string, required)  Canonical ingredient name, lowercase,
                                    unique within the list.
  reason        (string, required)  Short explanation shown with a match.
  group         (string, optional)  Heading used by `acrylis terms explain`.

Example:
{{
  "name": "Nail salon extras",
  "description": "Trade names seen on nail product labels",
  "concern": "acrylates",
  "version": "1.0",
  "terms": [
    {{
      "term": "hema",
      "reason": "2-hydroxyethyl methacrylate, a common nail allergen",
      "group": "Monomers"
    }},
    {{
      "term": "ethyl cyanoacrylate",
      "reason": "the main component of nail and lash glue"
    }}
  ],
  "false_positives": ["styrene/butadiene copolymer"],
  "substring_triggers": ["acryl", "methacryl"]
}}

Fungal acne lists match exactly and must not set false_positives or
substring_triggers.
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), AcrylisError> {
    let list = terms::load_term_list(file)?;

    println!("Term list '{}' (v{}) is valid.", list.name, list.version);
    println!("  Concern: {}", list.concern);
    println!("  Terms: {}", list.terms.len());
    if !list.false_positives.is_empty() {
        println!("  False positives: {}", list.false_positives.len());
    }
    if !list.substring_triggers.is_empty() {
        println!("  Substring triggers: {}", list.substring_triggers.len());
    }

    let warnings = terms::lint_term_list(&list);
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
