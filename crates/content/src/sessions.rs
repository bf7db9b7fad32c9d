use guide_core::model::{Difficulty, Lesson, Session, SessionId, Step};

fn step(title: &str, description: &str) -> Step {
    Step {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// The four training sessions, in reading order.
#[must_use]
pub fn sessions() -> Vec<Session> {
    vec![foundation(), creating_objects(), batch_and_search(), advanced()]
}

fn foundation() -> Session {
    Session {
        id: SessionId::new(1),
        title: "Foundation".into(),
        subtitle: "Understanding Archipelago & Drupal Basics".into(),
        duration: "~90 minutes".into(),
        difficulty: Difficulty::Beginner,
        audience: "All catalogers".into(),
        description: "This foundational session introduces Archipelago, its philosophy, and the \
                      essential concepts you need before creating digital objects."
            .into(),
        objectives: strings(&[
            "Understand what Archipelago is and its benefits for digital repositories",
            "Learn essential Drupal terminology (Nodes, Content Types, Fields)",
            "Grasp the concept of JSON-based flexible metadata",
            "Navigate the admin interface confidently",
        ]),
        lessons: vec![
            Lesson {
                id: "s1-intro".into(),
                title: "What is Archipelago?".into(),
                duration: "15 min".into(),
                content: r"
Archipelago is an open-source digital repository platform built on Drupal. Unlike traditional repository systems with rigid, pre-defined metadata schemas, Archipelago takes a radically flexible approach.

**The Philosophy:**
- **Simplification through Removal**: Rather than adding complexity, Archipelago removes unnecessary constraints
- **Flexible Metadata**: All metadata is stored as JSON, allowing unlimited customization without database changes
- **User Empowerment**: Provides all the controls you need while remaining approachable for non-technical users

**Why institutions choose Archipelago:**
- Perfect for diverse collections (photographs, paintings, manuscripts, rare books)
- Supports IIIF for high-quality image delivery and zooming
- Open-source with active community support
"
                .into(),
                tips: strings(&[
                    "Archipelago is NOT a traditional database with fixed fields",
                    "Think of it as a flexible container that adapts to your content",
                ]),
                steps: vec![],
            },
            Lesson {
                id: "s1-drupal".into(),
                title: "Essential Drupal Terminology".into(),
                duration: "20 min".into(),
                content: r"
Archipelago is built on Drupal, so understanding a few key terms will help you navigate the system.

**Node:** The basic unit of content in Drupal. Every Digital Object you create is a node behind the scenes. You might see it mentioned in URLs, like `/node/123`.

**Content Type:** A template that defines what kind of content you are creating. Archipelago primarily uses the Digital Object content type for all items.

**Strawberry Field:** Archipelago's special field that holds all your metadata as JSON. Instead of adding new database columns for each piece of metadata, everything goes into this one smart container.
"
                .into(),
                tips: strings(&[
                    "You don't need to be a Drupal expert, just know these basics",
                    "The Strawberry Field is what makes Archipelago flexible",
                ]),
                steps: vec![],
            },
            Lesson {
                id: "s1-json".into(),
                title: "Understanding JSON Metadata".into(),
                duration: "20 min".into(),
                content: r#"
Archipelago stores all descriptive metadata as JSON. You'll never have to write JSON directly, the webforms handle that for you.

**What JSON looks like:**

```json
{
  "type": "Photograph",
  "label": "Portrait of Sorolla",
  "date_created": "1909",
  "creator": "Unknown photographer"
}
```

**Why JSON matters:**
- **Flexibility**: Add any metadata field without changing the database
- **Portability**: Easy to export, share, and transform
- **Queryability**: Search across any field in your metadata

Metadata has keys (like `creator`) and values (like `Unknown photographer`). The webform translates your input into this structure automatically.
"#
                .into(),
                tips: strings(&[
                    "You'll enter data through friendly forms, not raw JSON",
                    "Understanding JSON helps when troubleshooting or doing advanced work",
                ]),
                steps: vec![],
            },
            Lesson {
                id: "s1-roles".into(),
                title: "User Roles & Permissions".into(),
                duration: "15 min".into(),
                content: r"
Different users have different capabilities. Understanding your role helps you know what you can do.

**Content Creator:**
- Create new Digital Objects
- Edit objects they created
- Save items as drafts or submit for review

**Content Editor:**
- All Content Creator abilities
- Edit any Digital Object
- Publish content directly

**What You Cannot Do (typically):**
- Change system configuration
- Delete published content
- Modify other users' permissions

When in doubt, save as Draft and ask a supervisor!
"
                .into(),
                tips: strings(&[
                    "Always save your work before leaving a page",
                    "When unsure about publishing, save as Draft first",
                ]),
                steps: vec![],
            },
        ],
    }
}

fn creating_objects() -> Session {
    Session {
        id: SessionId::new(2),
        title: "Creating Digital Objects".into(),
        subtitle: "Your First Photograph in Archipelago".into(),
        duration: "~90 minutes".into(),
        difficulty: Difficulty::Intermediate,
        audience: "Active catalogers".into(),
        description: "A hands-on session: create your first Digital Object, walk through each \
                      webform step, upload files, add linked data, and publish."
            .into(),
        objectives: strings(&[
            "Create a complete Digital Object from start to finish",
            "Upload files and observe automatic metadata extraction",
            "Add linked data from Wikidata, Library of Congress, and Getty",
            "Know the difference between Draft and Published states",
        ]),
        lessons: vec![
            Lesson {
                id: "s2-starting".into(),
                title: "Starting a New Digital Object".into(),
                duration: "10 min".into(),
                content: r"
Let's create your first Digital Object, a photograph from your collection.

**Navigate to Create:**
1. Click **Content** in the admin toolbar
2. Click **Add content**
3. Select **Digital Object**

**The Multi-Step Form:**
1. **My Metadata** - Basic descriptive information
2. **Linked Data** - Connections to authority sources
3. **Upload Files** - The actual digital files
4. **Complete** - Review and save

Each step builds on the previous one. You can navigate back and forth using the buttons at the bottom.
"
                .into(),
                tips: strings(&[
                    "You can save as Draft at any point to continue later",
                    "Required fields are marked with a red asterisk (*)",
                ]),
                steps: vec![],
            },
            Lesson {
                id: "s2-files".into(),
                title: "Uploading Files".into(),
                duration: "15 min".into(),
                content: r"
The Upload Files step attaches the actual digital files to your metadata.

**What Happens When You Upload:**
1. File is uploaded to temporary storage
2. Archipelago extracts technical metadata (EXIF, file size, dimensions)
3. Preview thumbnail is generated
4. File is associated with your object

**For Photographs:**
- Upload the highest quality file available
- TIFF for preservation, JPEG for access is ideal
- Multiple files can be attached to one object
"
                .into(),
                tips: vec![],
                steps: vec![
                    step(
                        "Choose files",
                        "Select your photograph file or drag it into the upload area",
                    ),
                    step("Wait for upload to complete", "A progress bar shows upload status"),
                    step(
                        "Review extracted metadata",
                        "Check that technical information was captured correctly",
                    ),
                ],
            },
            Lesson {
                id: "s2-publishing".into(),
                title: "Publishing Workflow".into(),
                duration: "15 min".into(),
                content: r"
The final step lets you review your work and choose how to save it.

**Draft:** Saves your work but keeps it private. Only logged-in users can see drafts.

**Published:** Makes the object visible to the public, or according to your permission settings.

Use Draft for work in progress, items waiting for review, or when you are uncertain about any detail. Publish once required fields are complete, files are verified, and the metadata has been reviewed.
"
                .into(),
                tips: strings(&["Note the URL of your new object for reference"]),
                steps: vec![
                    step("Review all entered information", "Use the navigation to check each section"),
                    step("Select save status", "Choose Draft or Published from the dropdown"),
                    step("Click Save", "Your Digital Object is created"),
                ],
            },
        ],
    }
}

fn batch_and_search() -> Session {
    Session {
        id: SessionId::new(3),
        title: "Batch Operations & Search".into(),
        subtitle: "AMI Imports and Finding Your Content".into(),
        duration: "~75 minutes".into(),
        difficulty: Difficulty::Intermediate,
        audience: "Catalogers working with large sets".into(),
        description: "Import many objects at once with AMI spreadsheets and learn to search the \
                      repository effectively."
            .into(),
        objectives: strings(&[
            "Prepare a well-formed import spreadsheet",
            "Run a small AMI batch import end to end",
            "Use advanced search syntax and facets",
        ]),
        lessons: vec![
            Lesson {
                id: "s3-spreadsheet".into(),
                title: "Preparing Import Spreadsheets".into(),
                duration: "25 min".into(),
                content: r"
A well-prepared spreadsheet is crucial for successful batch imports.

**Required Columns:**
- `type`: The object type (e.g., Photograph, Painting)
- `label`: The title for each object

**Formatting Rules:**
- First row must be column headers
- One object per row
- Multiple values separated by the pipe character

**Example Spreadsheet:**

| type | label | date_created | creator |
|------|-------|--------------|---------|
| Photograph | Sorolla Portrait 1 | 1910 | Unknown |
| Photograph | Sorolla Portrait 2 | 1912 | J. Laurent |
"
                .into(),
                tips: strings(&[
                    "Save as CSV for final upload (UTF-8 encoding)",
                    "Column names are case-sensitive",
                    "Always test with a small batch before large imports",
                ]),
                steps: vec![],
            },
            Lesson {
                id: "s3-import".into(),
                title: "Running a Batch Import".into(),
                duration: "20 min".into(),
                content: r"
AMI (Archipelago Multi Importer) processes your spreadsheet into Digital Objects.

An AMI Set keeps your source data, the column mapping, and the processing log together, so a failed import can be corrected and reprocessed without starting over.
"
                .into(),
                tips: strings(&["Keep your original spreadsheet as a backup"]),
                steps: vec![
                    step("Navigate to AMI Sets", "Go to Content, then AMI Sets"),
                    step("Create new AMI Set", "Choose CSV Upload as the data source"),
                    step("Upload your spreadsheet", "The first row is read as column headers"),
                    step("Configure column mapping", "Match spreadsheet columns to metadata keys"),
                    step("Process the set", "Start small, review the generated objects"),
                ],
            },
            Lesson {
                id: "s3-search".into(),
                title: "Searching Effectively".into(),
                duration: "15 min".into(),
                content: r#"
Archipelago uses Apache Solr for powerful search capabilities.

**Advanced Search Techniques:**
- **Exact phrase**: Use quotes, like "portrait of Sorolla"
- **OR search**: painting OR photograph
- **Exclude terms**: sorolla -landscape
- **Wildcards**: soroll* matches sorolla, sorollas, and more

**Field-Specific Search:**

Some interfaces allow searching specific fields:
- `creator:sorolla`
- `date_created:1910`

Start broad, then narrow with facets. Search is not case-sensitive.
"#
                .into(),
                tips: strings(&["Use facets to quickly narrow large result sets"]),
                steps: vec![],
            },
        ],
    }
}

fn advanced() -> Session {
    Session {
        id: SessionId::new(4),
        title: "Advanced Features".into(),
        subtitle: "Display, IIIF & Annotations".into(),
        duration: "~60 minutes".into(),
        difficulty: Difficulty::Advanced,
        audience: "Experienced catalogers".into(),
        description: "How objects are displayed, how IIIF serves deep-zoom images, and how to \
                      annotate regions of an image."
            .into(),
        objectives: strings(&[
            "Understand display modes and when each applies",
            "Explain what IIIF provides and why it matters",
        ]),
        lessons: vec![
            Lesson {
                id: "s4-iiif".into(),
                title: "IIIF and Image Serving".into(),
                duration: "20 min".into(),
                content: r"
IIIF (International Image Interoperability Framework) is how Archipelago delivers high-quality, zoomable images.

**What IIIF provides:**
- Deep zoom on large images without downloading the full file
- Sharing images across institutions with a common API
- Region, size, and rotation requests via a plain URL

A IIIF image URL encodes the request directly:

```
https://example.org/iiif/img001/full/800,/0/default.jpg
```

The viewer requests only the tiles it needs, so even gigapixel scans stay responsive.
"
                .into(),
                tips: strings(&["IIIF is pronounced triple-eye-eff"]),
                steps: vec![],
            },
            Lesson {
                id: "s4-annotations".into(),
                title: "Creating Annotations".into(),
                duration: "20 min".into(),
                content: r"
Annotations attach notes to regions of an image, useful for identifying people in a group photograph or transcribing inscriptions.

**Process:**
1. Open the object in full view
2. Activate the annotation tool
3. Draw a region on the image
4. Enter your note and save

Annotations are stored alongside the object's metadata and are searchable like any other text.
"
                .into(),
                tips: strings(&["Keep annotation text short and factual"]),
                steps: vec![],
            },
        ],
    }
}
