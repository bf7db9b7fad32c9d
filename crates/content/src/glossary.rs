use guide_core::model::{GlossaryCategory, GlossaryTerm};

/// Glossary terms in teaching order: platform basics first, then repository
/// concepts, then general technical vocabulary.
#[must_use]
pub fn glossary() -> Vec<GlossaryTerm> {
    use GlossaryCategory::{Archipelago, Drupal, Technical};

    vec![
        GlossaryTerm::new(
            "Node",
            "In Drupal, a node is any piece of content. Every Digital Object in Archipelago is \
             stored as a Drupal node with a specific Content Type.",
            Drupal,
        ),
        GlossaryTerm::new(
            "Content Type",
            "A template that defines what fields and settings are available for a type of \
             content. Archipelago typically uses a Digital Object content type for all items.",
            Drupal,
        ),
        GlossaryTerm::new(
            "ADO",
            "Archipelago Digital Object: any piece of content in the repository that uses the \
             Strawberry Field for metadata storage.",
            Archipelago,
        ),
        GlossaryTerm::new(
            "Strawberry Field",
            "A special Drupal field type that stores all metadata as flexible JSON. This is the \
             heart of Archipelago's metadata system.",
            Archipelago,
        ),
        GlossaryTerm::new(
            "AMI",
            "Archipelago Multi Importer: the batch import tool that turns spreadsheets into \
             Digital Objects.",
            Archipelago,
        ),
        GlossaryTerm::new(
            "JSON",
            "JavaScript Object Notation: a lightweight data format of key-value pairs used by \
             Archipelago to store metadata.",
            Technical,
        ),
        GlossaryTerm::new(
            "IIIF",
            "International Image Interoperability Framework: a set of APIs for serving \
             high-quality, zoomable images across institutions.",
            Technical,
        ),
        GlossaryTerm::new(
            "Linked Data",
            "Metadata values connected to authority sources such as Wikidata, Library of \
             Congress, or Getty, stored as both a label and an identifier.",
            Technical,
        ),
        GlossaryTerm::new(
            "Webform",
            "The form interface used for data entry. Webforms provide a user-friendly way to \
             input metadata that is stored as JSON in the Strawberry Field.",
            Drupal,
        ),
        GlossaryTerm::new(
            "Solr",
            "The search engine Archipelago uses to index metadata and full text for fast \
             querying and facets.",
            Technical,
        ),
    ]
}
