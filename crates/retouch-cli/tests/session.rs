//! Scripted sessions against a real image directory and preview file.

use retouch_cli::{Prompter, Session};
use retouch_core::{PixelBuffer, Shape};
use retouch_io::{decode, png, DirectoryCatalog, PngPresenter};
use retouch_ops::EngineOptions;
use std::io::Cursor;

fn run(catalog: DirectoryCatalog, preview: PngPresenter, script: &str) -> Session<DirectoryCatalog, PngPresenter> {
    let mut session = Session::new(catalog, preview, EngineOptions::default());
    let mut prompt = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    session.run(&mut prompt).unwrap();
    session
}

#[test]
fn edits_land_in_preview() {
    let pictures = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    png::write(pictures.path().join("grey.png"), &PixelBuffer::filled(Shape::new(3, 3, 3), 100)).unwrap();
    std::fs::write(pictures.path().join("readme.txt"), "not an image").unwrap();

    let preview = out.path().join("preview.png");
    // select 0, brightness +50, exit
    let session = run(
        DirectoryCatalog::new(pictures.path()),
        PngPresenter::new(&preview),
        "0\n0\n50\n8\n",
    );

    assert_eq!(session.presenter().written(), 2);
    let shown = decode::read(&preview).unwrap();
    assert_eq!(shown, PixelBuffer::filled(Shape::new(3, 3, 3), 150));
}

#[test]
fn broken_file_is_reported_and_reasked() {
    let pictures = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    std::fs::write(pictures.path().join("a_broken.png"), b"garbage").unwrap();
    png::write(pictures.path().join("b_good.png"), &PixelBuffer::filled(Shape::new(4, 4, 3), 9)).unwrap();

    // broken pick, good pick, blur, change to broken (kept), exit
    let session = run(
        DirectoryCatalog::new(pictures.path()),
        PngPresenter::new(out.path().join("preview.png")),
        "0\n1\n5\n7\n0\n8\n",
    );

    let engine = session.engine().unwrap();
    assert_eq!(engine.origin(), &PixelBuffer::filled(Shape::new(4, 4, 3), 9));
    assert_eq!(engine.target(), engine.origin());
    assert_eq!(session.presenter().written(), 2);
}
