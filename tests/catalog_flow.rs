//! End-to-end flows over an on-disk dataset and image directory.

use frame_catalog::domain::aggregates::{FilterState, FramePdFilter, MainImage};
use frame_catalog::domain::value_objects::ImageDir;
use frame_catalog::navigation::detail_link;
use frame_catalog::probe::FsImageProbe;
use frame_catalog::{load_catalog, CatalogError, CatalogView, DetailView};
use std::path::PathBuf;
use tempfile::TempDir;

const FRAMES: &str = r#"[
    {"FrameName": "Aviator", "SKU": "AV-B52", "Color": "Black", "ColorTags": ["Black"], "Material": "Metal",
     "EyeSize": 52, "B": 40, "FramePD": 68, "Temple": 140, "Discontinued": false, "BackOrdered": false,
     "HeroImage": "av-black.jpg", "ExtraImages": ["av-black-side.jpg"]},
    {"FrameName": "Aviator", "SKU": "AV-G54", "Color": "Gold", "ColorTags": "Gold, Yellow", "Material": "Metal",
     "EyeSize": 54, "B": 42, "FramePD": 70, "Temple": 145, "Discontinued": false, "BackOrdered": true,
     "HeroImage": "av-gold.jpg"},
    {"FrameName": "Cat Eye & Co", "SKU": "CE-1", "Color": "Red", "ColorTags": "Red", "Material": "Sport",
     "EyeSize": 50, "B": 38, "FramePD": 52, "Temple": 135, "Discontinued": false, "BackOrdered": false,
     "HeroImage": ""},
    {"FrameName": "Shield", "SKU": "SH-1", "Color": "Clear", "ColorTags": ["Clear"], "Material": "Safety",
     "EyeSize": 60, "B": 45, "FramePD": 75, "Temple": 150, "Discontinued": true, "BackOrdered": false,
     "HeroImage": "shield.jpg"}
]"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("frames.json"), FRAMES).unwrap();
        std::fs::create_dir(dir.path().join("images")).unwrap();
        for file in ["av-black.jpg", "av-gold.jpg", "av-black-side.jpg"] {
            std::fs::write(dir.path().join("images").join(file), b"img").unwrap();
        }
        Self { dir }
    }

    fn data(&self) -> PathBuf { self.dir.path().join("frames.json") }
    fn images(&self) -> ImageDir { ImageDir::new(self.dir.path().join("images"), "coming-soon.jpg") }
    fn image(&self, file: &str) -> PathBuf { self.dir.path().join("images").join(file) }
}

#[tokio::test]
async fn test_list_view_flow() {
    let fx = Fixture::new();
    let catalog = load_catalog(fx.data()).await.unwrap();
    let mut view = CatalogView::new(catalog, fx.images());

    assert_eq!(view.options().color_tags, vec!["Black", "Gold", "Red", "Yellow"]);
    assert_eq!(view.options().materials, vec!["Metal", "Sport"]);

    let cards = view.thumbnails();
    let names: Vec<&str> = cards.iter().map(|c| c.frame_name.as_str()).collect();
    assert_eq!(names, vec!["Aviator", "Cat Eye & Co"]);
    assert_eq!(cards[1].image, fx.image("coming-soon.jpg"));

    let cards = view.apply_filters(FilterState::new().with_search("52"));
    assert_eq!(cards.len(), 2);

    let cards = view.apply_filters(
        FilterState::new().with_frame_pd(FramePdFilter::from_inputs(Some("70"), Some("1"), Some("2"))),
    );
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].sku_count, 1);
    assert_eq!(cards[0].image, fx.image("av-gold.jpg"));
}

#[tokio::test]
async fn test_detail_view_flow() {
    let fx = Fixture::new();
    let catalog = load_catalog(fx.data()).await.unwrap();
    let probe = FsImageProbe::new(fx.images());

    let mut view = DetailView::open_link(&catalog, &detail_link("Aviator"), fx.images()).unwrap();
    view.settle(&probe).await;
    assert_eq!(view.main_image_path(), fx.image("av-black.jpg"));
    assert!(!view.main_image().overlay_visible);

    view.select_eye_size(54).unwrap();
    view.settle(&probe).await;
    assert_eq!(view.main_image(), &MainImage::placeholder());
    assert!(view.gallery().is_empty());

    view.select_color("Gold").unwrap();
    view.settle(&probe).await;
    assert_eq!(view.main_image_path(), fx.image("av-gold.jpg"));
    assert!(view.main_image().overlay_visible);
    assert_eq!(view.sku_table().len(), 2);
}

#[tokio::test]
async fn test_special_names_and_placeholders() {
    let fx = Fixture::new();
    let catalog = load_catalog(fx.data()).await.unwrap();

    let mut view = DetailView::open_link(&catalog, &detail_link("Cat Eye & Co"), fx.images()).unwrap();
    assert!(view.take_pending_probe().is_none());
    assert_eq!(view.main_image_path(), fx.image("coming-soon.jpg"));

    assert!(matches!(
        DetailView::open(&catalog, "Shield", fx.images()),
        Err(CatalogError::FrameNotFound { .. })
    ));
}
