use guide_core::model::{ChecklistError, ChecklistItem, ChecklistSeed, SessionId};

/// The fixed checklist definitions, grouped by session.
///
/// # Errors
///
/// Returns `ChecklistError::DuplicateId` if the definitions ever regress to
/// sharing an id; the content tests keep this from reaching runtime.
pub fn checklist_seed() -> Result<ChecklistSeed, ChecklistError> {
    let item =
        |id: &str, session: u32, label: &str| ChecklistItem::new(id, SessionId::new(session), label);

    ChecklistSeed::new(vec![
        // Session 1: Foundation
        item(
            "s1-what-is-archipelago",
            1,
            "Understand what Archipelago is and its philosophy",
        ),
        item(
            "s1-drupal-basics",
            1,
            "Know basic Drupal terminology (Nodes, Content Types)",
        ),
        item("s1-json-metadata", 1, "Understand JSON-based metadata concept"),
        item("s1-understand-roles", 1, "Understand user roles and permissions"),
        // Session 2: Creating Digital Objects
        item("s2-create-object", 2, "Created a test digital object (photograph)"),
        item("s2-file-uploads", 2, "Can upload and manage files"),
        item("s2-linked-data", 2, "Can add linked data (Wikidata, LOC, Getty)"),
        item("s2-publish-draft", 2, "Know when to save as Draft versus Publish"),
        // Session 3: Batch Operations & Search
        item("s3-spreadsheet", 3, "Prepared a valid AMI import spreadsheet"),
        item("s3-batch-import", 3, "Ran a small batch import end to end"),
        item("s3-search", 3, "Can use advanced search syntax and facets"),
        // Session 4: Advanced Features
        item("s4-iiif", 4, "Can explain what IIIF provides"),
        item("s4-annotations", 4, "Created an annotation on an image region"),
    ])
}
