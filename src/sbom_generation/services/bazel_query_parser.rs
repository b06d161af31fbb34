use crate::sbom_generation::domain::BazelRule;
use roxmltree::{Document, Node, ParsingOptions};

/// BazelQueryParser service turning `bazel query --output=xml` text into rules
///
/// Only well-formedness is checked. Missing attributes become empty strings
/// and missing `tags`/`deps` lists become `None`; deciding what such a rule
/// contributes is left to the extractor.
pub struct BazelQueryParser;

impl BazelQueryParser {
    /// Parses every `<rule>` element in document order
    ///
    /// # Errors
    /// Returns the XML parser error if the document is not well-formed
    pub fn parse(xml: &str) -> Result<Vec<BazelRule>, roxmltree::Error> {
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;
        let document = Document::parse_with_options(xml, options)?;

        Ok(document
            .descendants()
            .filter(|node| node.has_tag_name("rule"))
            .map(Self::to_rule)
            .collect())
    }

    fn to_rule(rule: Node<'_, '_>) -> BazelRule {
        BazelRule::new(
            rule.attribute("class").unwrap_or_default(),
            rule.attribute("name").unwrap_or_default(),
            Self::list_values(rule, "tags", "string"),
            Self::list_values(rule, "deps", "label"),
        )
    }

    /// Values of the `item_tag` children of the first `<list name="...">`
    /// below `rule`, or `None` if there is no such list
    fn list_values(rule: Node<'_, '_>, list_name: &str, item_tag: &str) -> Option<Vec<String>> {
        let list = rule
            .descendants()
            .find(|node| node.has_tag_name("list") && node.attribute("name") == Some(list_name))?;

        Some(
            list.children()
                .filter(|child| child.has_tag_name(item_tag))
                .map(|child| child.attribute("value").unwrap_or_default().to_string())
                .collect(),
        )
    }
}
