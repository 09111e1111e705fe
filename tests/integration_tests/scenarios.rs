use std::fs::{self, File};
use std::io::Read;

use assertables::{assert_contains, assert_not_contains};
use codestar_logo::{ColorVariant, SvgDocument};

use crate::utils::{command, list_dir, logo_path, png_size, workdir};

#[test]
fn test_standard_svg_with_tagline() {
    let dir = workdir();
    command(dir.path())
        .args(["--color", "standard", "--format", "svg", "--option", "tagline", "--no-zip"])
        .assert()
        .success();

    let out = dir.path().join("codestar_logos");
    assert_eq!(list_dir(&out), ["codestar_logo_standard_(tagline).svg"]);

    let text = fs::read_to_string(out.join("codestar_logo_standard_(tagline).svg")).unwrap();
    let doc: SvgDocument = text.parse().unwrap();
    let source = SvgDocument::load(logo_path()).unwrap();
    assert_eq!(doc.viewbox().unwrap(), source.viewbox().unwrap());
    assert_eq!(doc.element_count(), source.element_count());
    assert_eq!(doc.style_text(), Some(ColorVariant::Standard.stylesheet()));
    assert_contains!(text, r#"id="tagline""#);
}

#[test]
fn test_cropped_svg() {
    let dir = workdir();
    command(dir.path())
        .args(["-c", "light", "-f", "svg", "-nz"])
        .assert()
        .success();

    let text =
        fs::read_to_string(dir.path().join("codestar_logos/codestar_logo_light.svg")).unwrap();
    assert_contains!(text, r#"viewBox="0 0 2102 421""#);
    assert_contains!(text, ".st1{fill:#000000;opacity:1.00;}");
    assert_not_contains!(text, r#"id="tagline""#);

    let doc: SvgDocument = text.parse().unwrap();
    let vb = doc.viewbox().unwrap();
    assert!((vb.height - vb.width * 421. / 2102.).abs() < 1e-3);
}

#[test]
fn test_all_colors_png_no_zip() {
    let dir = workdir();
    let out = dir.path().join("codestar_logos");
    fs::create_dir_all(out.join("leftover")).unwrap();
    fs::write(out.join("codestar_logo_old.png"), "stale").unwrap();

    command(dir.path())
        .args(["--color", "all", "--format", "png", "--width", "512", "--no-zip"])
        .assert()
        .success();

    let mut expected = Vec::new();
    for color in ["dark", "light", "monochrome", "standard"] {
        expected.push(format!("codestar_logo_{color}_[width=512].png"));
        expected.push(format!("codestar_logo_{color}_[width=512]@2x.png"));
    }
    assert_eq!(list_dir(&out), expected);
    for name in &expected {
        let size = png_size(&fs::read(out.join(name)).unwrap());
        if name.ends_with("@2x.png") {
            assert_eq!(size, (1024, 205), "{name}");
        } else {
            assert_eq!(size, (512, 102), "{name}");
        }
    }
    assert!(!dir.path().join("codestar_logos.zip").exists());
}

#[test]
fn test_height_and_width_not_merged() {
    let dir = workdir();
    command(dir.path())
        .args(["-c", "dark", "-o", "tagline", "-f", "png", "-H", "100", "-W", "100", "-nz"])
        .assert()
        .success();

    let out = dir.path().join("codestar_logos");
    assert_eq!(
        list_dir(&out),
        [
            "codestar_logo_dark_(tagline)_[height=100].png",
            "codestar_logo_dark_(tagline)_[height=100]@2x.png",
            "codestar_logo_dark_(tagline)_[width=100].png",
            "codestar_logo_dark_(tagline)_[width=100]@2x.png",
        ]
    );
    let size = |name: &str| png_size(&fs::read(out.join(name)).unwrap());
    assert_eq!(size("codestar_logo_dark_(tagline)_[height=100].png"), (376, 100));
    assert_eq!(size("codestar_logo_dark_(tagline)_[width=100]@2x.png"), (200, 53));
}

#[test]
fn test_zip_by_default() {
    let dir = workdir();
    command(dir.path())
        .args(["-c", "monochrome", "-c", "dark", "-f", "svg", "-f", "png", "-H", "32"])
        .assert()
        .success();

    assert_eq!(list_dir(dir.path()), ["codestar_logos.zip", "logo.svg"]);
    let file = File::open(dir.path().join("codestar_logos.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut names: Vec<_> = archive.file_names().map(str::to_string).collect();
    names.sort();
    assert_eq!(
        names,
        [
            "codestar_logo_dark.svg",
            "codestar_logo_dark_[height=32].png",
            "codestar_logo_dark_[height=32]@2x.png",
            "codestar_logo_monochrome.svg",
            "codestar_logo_monochrome_[height=32].png",
            "codestar_logo_monochrome_[height=32]@2x.png",
        ]
    );

    let mut svg = String::new();
    archive
        .by_name("codestar_logo_monochrome.svg")
        .unwrap()
        .read_to_string(&mut svg)
        .unwrap();
    assert_contains!(svg, ".st0{fill:#000000;}");

    let mut png = Vec::new();
    archive
        .by_name("codestar_logo_dark_[height=32]@2x.png")
        .unwrap()
        .read_to_end(&mut png)
        .unwrap();
    assert_eq!(png_size(&png), (319, 64));
}

#[test]
fn test_custom_source_and_destination() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out/assets");
    fs::create_dir_all(dest.parent().unwrap()).unwrap();
    command(dir.path())
        .arg("-s")
        .arg(logo_path())
        .arg("-d")
        .arg(&dest)
        .args(["-c", "standard", "-f", "svg", "--nz"])
        .assert()
        .success();
    assert_eq!(list_dir(&dest), ["codestar_logo_standard.svg"]);
}
