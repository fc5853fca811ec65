// file: src/test_support.rs
// description: shared fixtures for unit tests (real pdfs and fake backends)
// reference: https://docs.rs/lopdf

use crate::error::{PipelineError, Result};
use crate::extractor::PdfBackend;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary, encryption};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const PAD_BYTES: [u8; 32] = [
    0x28, 0xBF, 0x4E, 0x5E, 0x4E, 0x75, 0x8A, 0x41, 0x64, 0x00, 0x4E, 0x56, 0xFF, 0xFA, 0x01, 0x08,
    0x2E, 0x2E, 0x00, 0xB6, 0xD0, 0x68, 0x3E, 0x80, 0x2F, 0x0C, 0xA9, 0xFE, 0x64, 0x53, 0x69, 0x7A,
];

/// Writes a PDF with one page per entry of `pages`, each page showing that text.
/// An empty entry produces a page with no text operators.
pub fn write_text_pdf(path: &Path, pages: &[&str]) {
    let mut doc = build_text_pdf(pages);
    doc.save(path).expect("fixture pdf saves");
}

/// Like `write_text_pdf`, but protected with 40-bit RC4 (standard handler,
/// revision 2) under `user_password`.
pub fn write_encrypted_pdf(path: &Path, pages: &[&str], user_password: &str) {
    let mut doc = build_text_pdf(pages);
    doc.trailer.set(
        "ID",
        vec![
            Object::string_literal(b"fixture-file-id0".to_vec()),
            Object::string_literal(b"fixture-file-id0".to_vec()),
        ],
    );
    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1_i64,
        "R" => 2_i64,
        "Length" => 40_i64,
        "P" => -4_i64,
        "O" => Object::string_literal(vec![0x4F_u8; 32]),
    });
    doc.trailer.set("Encrypt", encrypt_id);

    let key = encryption::get_encryption_key(&doc, user_password, false)
        .expect("fixture key derives");
    doc.get_object_mut(encrypt_id)
        .and_then(Object::as_dict_mut)
        .expect("encrypt dictionary")
        .set("U", Object::string_literal(rc4(&key, &PAD_BYTES)));

    let stream_ids: Vec<ObjectId> = doc
        .objects
        .iter()
        .filter(|(_, obj)| matches!(obj, Object::Stream(_)))
        .map(|(id, _)| *id)
        .collect();
    for id in stream_ids {
        let obj = doc.objects.get_mut(&id).expect("stream object");
        // RC4 is symmetric, so the decrypt routine also encrypts.
        let sealed = encryption::decrypt_object(&key, id, obj).expect("stream encrypts");
        if let Object::Stream(stream) = obj {
            stream.set_content(sealed);
        }
    }

    doc.save(path).expect("fixture pdf saves");
}

fn rc4(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut state: Vec<u8> = (0..=255).collect();
    let mut j = 0u8;
    for i in 0..256 {
        j = j.wrapping_add(state[i]).wrapping_add(key[i % key.len()]);
        state.swap(i, j as usize);
    }

    let (mut i, mut j) = (0u8, 0u8);
    data.iter()
        .map(|byte| {
            i = i.wrapping_add(1);
            j = j.wrapping_add(state[i as usize]);
            state.swap(i as usize, j as usize);
            let k = state[state[i as usize].wrapping_add(state[j as usize]) as usize];
            byte ^ k
        })
        .collect()
}

fn build_text_pdf(pages: &[&str]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let operations = if text.is_empty() {
            vec![]
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content encodes"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Serves canned page texts keyed by file name; unknown names fail to open.
#[derive(Debug, Default)]
pub struct FakeBackend {
    documents: HashMap<String, Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, file_name: &str, pages: &[&str]) -> Self {
        self.documents.insert(
            file_name.to_string(),
            pages.iter().map(|p| p.to_string()).collect(),
        );
        self
    }
}

impl PdfBackend for FakeBackend {
    fn open_document(&self, path: &Path) -> Result<Vec<String>> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        self.documents
            .get(&name)
            .cloned()
            .ok_or_else(|| PipelineError::PdfOpen {
                path: PathBuf::from(path),
                message: "unsupported format".to_string(),
            })
    }
}
