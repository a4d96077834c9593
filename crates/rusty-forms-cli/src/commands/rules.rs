use anyhow::{Context, Result};
use rusty_forms::rules::{parse_rules_strict, Rule};

pub fn execute(rule_string: &str, json: bool) -> Result<()> {
    let rules = parse(rule_string)?;

    if json {
        println!("{}", to_json(&rules)?);
    } else {
        for rule in &rules {
            println!("{}", describe_rule(rule));
        }
    }

    Ok(())
}

fn parse(rule_string: &str) -> Result<Vec<Rule>> {
    parse_rules_strict(rule_string)
        .with_context(|| format!("Invalid rule string: {:?}", rule_string))
}

fn to_json(rules: &[Rule]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rules)?)
}

/// One line per declared rule: name, then the bound for size rules
fn describe_rule(rule: &Rule) -> String {
    match rule.param {
        Some(bound) => format!("{}\t{}", rule.kind, bound),
        None => rule.kind.to_string(),
    }
}
