use dominance::image::io::Reader as ImageReader;

fn main() {
    let path = std::env::args().nth(1).expect("usage: dominance <image>");

    let reader = ImageReader::open(path).unwrap();
    let img = reader.decode().unwrap();
    let buf = img.to_rgb8();

    let palette = dominance::PaletteBuilder::from_image(buf).generate().unwrap();

    for (index, swatch) in palette.swatches().iter().enumerate() {
        println!("Color {}: {} - {:.2}%", index + 1, swatch.hex(), swatch.percentage());
    }
}
