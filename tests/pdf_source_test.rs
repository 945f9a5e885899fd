//! Integration tests for the lopdf-backed content-stream collaborator

extern crate std;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use treekit::{PageImageSource, PaintOperator, PdfDocument, PixelKind};

/// Build a one-page PDF whose content stream paints the given XObjects
fn build_pdf(xobjects: Vec<(&str, Stream)>, extra_do: Vec<&str>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut xobject_dict = lopdf::Dictionary::new();
    let mut operations = Vec::new();
    for (name, stream) in xobjects {
        let id = doc.add_object(stream);
        xobject_dict.set(name.as_bytes().to_vec(), Object::Reference(id));
        operations.push(Operation::new("Do", vec![Object::Name(name.as_bytes().to_vec())]));
    }
    for name in extra_do {
        operations.push(Operation::new("Do", vec![Object::Name(name.as_bytes().to_vec())]));
    }

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "Contents" => Object::Reference(content_id),
        "Resources" => dictionary! { "XObject" => Object::Dictionary(xobject_dict) },
        "MediaBox" => vec![0.into(), 0.into(), 100.into(), 100.into()],
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![Object::Reference(page_id)],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

fn rgb_image_stream(width: i64, height: i64, data: Vec<u8>) -> Stream {
    Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width,
            "Height" => height,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        data,
    )
}

#[test]
fn test_paint_ops_lists_painted_images_in_order() {
    let bytes = build_pdf(
        vec![
            ("Im1", rgb_image_stream(2, 1, vec![1, 2, 3, 4, 5, 6])),
            ("Im2", rgb_image_stream(1, 1, vec![7, 8, 9])),
        ],
        vec![],
    );

    let document = PdfDocument::from_bytes(&bytes).unwrap();
    std::assert_eq!(document.page_count(), 1);

    let page = document.first_page().unwrap();
    let ops = page.paint_ops().unwrap();

    std::assert_eq!(ops.len(), 2);
    std::assert_eq!(ops[0].image_key, "Im1");
    std::assert_eq!(ops[0].operator, PaintOperator::Image);
    std::assert_eq!(ops[1].image_key, "Im2");
}

#[test]
fn test_paint_ops_skips_non_image_xobjects() {
    let form = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Form",
            "BBox" => vec![0.into(), 0.into(), 10.into(), 10.into()],
        },
        Vec::new(),
    );
    let bytes = build_pdf(
        vec![
            ("Fm1", form),
            ("Im1", rgb_image_stream(1, 1, vec![10, 20, 30])),
        ],
        vec!["Missing"],
    );

    let document = PdfDocument::from_bytes(&bytes).unwrap();
    let page = document.first_page().unwrap();
    let ops = page.paint_ops().unwrap();

    // The form and the unresolvable Do target are both skipped
    std::assert_eq!(ops.len(), 1);
    std::assert_eq!(ops[0].image_key, "Im1");
}

#[test]
fn test_resolve_image_maps_rgb_metadata() {
    let data = vec![9, 8, 7, 6, 5, 4];
    let bytes = build_pdf(vec![("Im1", rgb_image_stream(2, 1, data.clone()))], vec![]);

    let document = PdfDocument::from_bytes(&bytes).unwrap();
    let page = document.first_page().unwrap();

    let image = page.resolve_image("Im1").unwrap();
    std::assert_eq!(image.width, 2);
    std::assert_eq!(image.height, 1);
    std::assert_eq!(image.kind, PixelKind::Rgb24Bpp);
    std::assert_eq!(image.data, data);
}

#[test]
fn test_resolve_image_maps_1bpp_gray() {
    let stream = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => 8,
            "Height" => 2,
            "ColorSpace" => "DeviceGray",
            "BitsPerComponent" => 1,
        },
        vec![0b11110000, 0b00001111],
    );
    let bytes = build_pdf(vec![("Im1", stream)], vec![]);

    let document = PdfDocument::from_bytes(&bytes).unwrap();
    let page = document.first_page().unwrap();

    let image = page.resolve_image("Im1").unwrap();
    std::assert_eq!(image.kind, PixelKind::Grayscale1Bpp);
    std::assert_eq!(image.data, vec![0b11110000, 0b00001111]);
}

#[test]
fn test_resolve_image_rejects_unsupported_encoding() {
    let stream = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => 1,
            "Height" => 1,
            "ColorSpace" => "DeviceCMYK",
            "BitsPerComponent" => 8,
        },
        vec![0, 0, 0, 0],
    );
    let bytes = build_pdf(vec![("Im1", stream)], vec![]);

    let document = PdfDocument::from_bytes(&bytes).unwrap();
    let page = document.first_page().unwrap();

    std::assert!(page.resolve_image("Im1").is_err());
}
