fn main() -> mmcq::Result<()> {
    let image = mmcq::open("plush.jpg")?;
    let palette = mmcq::Palette::from_image(image).levels(3).generate()?;

    println!("{:#?}", palette);
    Ok(())
}
