// only quantize the center quarter of the image, e.g. to theme a UI around a cropped thumbnail
fn main() -> mmcq::Result<()> {
    let image = mmcq::open("plush.jpg")?.into_rgb8();
    let (width, height) = image.dimensions();

    let palette = mmcq::Palette::from_image(image)
        .region(width / 4, height / 4, width / 2, height / 2)
        .levels(2)
        .generate()?;

    print!("{}", palette);
    Ok(())
}
