//! Page-level concatenation of complete PDF documents

use crate::types::*;
use lopdf::{Document, Object, ObjectId, dictionary};

/// Page attributes a page may inherit from its ancestors in the page tree
const INHERITABLE: [&[u8]; 4] = [b"MediaBox", b"Resources", b"CropBox", b"Rotate"];

/// Letter-sized fallback for pages with no MediaBox anywhere in their tree
const FALLBACK_MEDIA_BOX: [i64; 4] = [0, 0, 612, 792];

/// Guard against cyclic Parent chains in malformed files
const MAX_TREE_DEPTH: usize = 64;

/// Concatenate the pages of `documents` in order into one new document.
///
/// Objects of each input are renumbered into a shared id space. Every page
/// carries its own copy of the inheritable attributes and hangs off a single
/// new page tree root.
pub fn merge_documents(documents: &[Document]) -> Result<Document> {
    if documents.is_empty() {
        return Err(PackageError::NoDocuments);
    }

    let mut merged = Document::with_version("1.5");
    let mut page_ids: Vec<ObjectId> = Vec::new();

    for source in documents {
        let mut doc = source.clone();
        doc.renumber_objects_with(merged.max_id + 1);

        let pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
        for &page_id in &pages {
            inherit_attributes(&mut doc, page_id)?;
        }

        let highest = doc.objects.keys().map(|(number, _)| *number).max().unwrap_or(0);
        merged.max_id = merged.max_id.max(doc.max_id).max(highest);
        for (id, object) in doc.objects {
            if is_tree_root(&object) {
                continue;
            }
            merged.objects.insert(id, object);
        }
        page_ids.extend(pages);
    }

    let pages_id = merged.new_object_id();
    for &page_id in &page_ids {
        merged.get_dictionary_mut(page_id)?.set("Parent", pages_id);
    }

    let kids: Vec<Object> = page_ids.iter().copied().map(Object::Reference).collect();
    merged.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_ids.len() as i64,
        }),
    );

    let catalog_id = merged.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    merged.trailer.set("Root", catalog_id);

    log::debug!(
        "Merged {} documents into {} pages",
        documents.len(),
        page_ids.len()
    );
    Ok(merged)
}

/// Copy inherited attributes from the page tree onto the page itself
fn inherit_attributes(doc: &mut Document, page_id: ObjectId) -> Result<()> {
    let page = doc.get_dictionary(page_id)?;
    let mut missing: Vec<&[u8]> = INHERITABLE
        .iter()
        .copied()
        .filter(|key| !page.has(key))
        .collect();
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    let mut inherited: Vec<(&[u8], Object)> = Vec::new();

    let mut depth = 0;
    while let Some(parent_id) = parent {
        if missing.is_empty() || depth >= MAX_TREE_DEPTH {
            break;
        }
        let Ok(node) = doc.get_dictionary(parent_id) else {
            break;
        };
        missing.retain(|key| match node.get(key) {
            Ok(value) => {
                inherited.push((*key, value.clone()));
                false
            }
            Err(_) => true,
        });
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
        depth += 1;
    }

    let page = doc.get_dictionary_mut(page_id)?;
    for (key, value) in inherited {
        page.set(key.to_vec(), value);
    }
    if !page.has(b"MediaBox") {
        let media_box: Vec<Object> = FALLBACK_MEDIA_BOX.iter().map(|&v| v.into()).collect();
        page.set("MediaBox", media_box);
    }
    Ok(())
}

fn type_name(object: &Object) -> Option<&[u8]> {
    object.as_dict().ok()?.get(b"Type").ok()?.as_name().ok()
}

/// Catalog and page tree nodes are rebuilt for the merged document
fn is_tree_root(object: &Object) -> bool {
    matches!(type_name(object), Some(name) if name == b"Catalog" || name == b"Pages")
}
