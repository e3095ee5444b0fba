#![allow(dead_code)]

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{
    Dictionary, Document, EncryptionState, EncryptionVersion, Object, Permissions, Stream,
    dictionary,
};

/// Build a PDF with one page per entry of `pages`, each page showing its
/// lines top to bottom in Helvetica.
pub fn build_pdf(pages: &[&[&str]]) -> Document {
    build_pdf_with_fonts(pages, Vec::new())
}

/// Like [`build_pdf`], with `extra_fonts` added to the shared page resources
/// but never selected by any page.
pub fn build_pdf_with_fonts(pages: &[&[&str]], extra_fonts: Vec<(&str, Dictionary)>) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let mut fonts = dictionary! {
        "F1" => font_id,
    };
    for (name, font) in extra_fonts {
        let id = doc.add_object(font);
        fonts.set(name, id);
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            let y = 750 - 20 * i as i64;
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new("Td", vec![72.into(), y.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// A composite font with Identity-H encoding and no ToUnicode map.
pub fn cid_font_without_to_unicode() -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type0",
        "BaseFont" => "NotoSansCJK-Regular",
        "Encoding" => "Identity-H",
    }
}

/// Encrypt `doc` with RC4 128-bit using the given passwords.
pub fn encrypt(doc: &mut Document, owner_password: &str, user_password: &str) {
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::string_literal(vec![7u8; 16]),
            Object::string_literal(vec![9u8; 16]),
        ]),
    );
    let version = EncryptionVersion::V2 {
        document: &*doc,
        owner_password,
        user_password,
        key_length: 128,
        permissions: Permissions::all(),
    };
    let state = EncryptionState::try_from(version).unwrap();
    doc.encrypt(&state).unwrap();
}

pub fn write_encrypted_pdf(path: &Path, pages: &[&[&str]], owner_password: &str, user_password: &str) {
    let mut doc = build_pdf(pages);
    encrypt(&mut doc, owner_password, user_password);
    doc.save(path).unwrap();
}

pub fn write_pdf(path: &Path, pages: &[&[&str]]) {
    let mut doc = build_pdf(pages);
    doc.save(path).unwrap();
}

pub fn pdf_bytes(pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = build_pdf(pages);
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}
