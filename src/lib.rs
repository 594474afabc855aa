// Copyright 2022 Spanfile
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A library to extract dominant colors from an image.
//!
//! The image's pixels are clustered in raw RGB space with a fixed-budget k-means pass, yielding one
//! [`Swatch`] per cluster: the cluster's mean color and its share of the image's pixels. Swatches
//! keep their cluster order; they are not sorted by share or by any color property.
//!
//! Centroid seeding is random. By default it draws from system randomness, so two runs over the
//! same image may produce different palettes; pass a seed through [`PaletteBuilder::seed`] for
//! reproducible output. Callers that already hold raw color samples can skip the image handling
//! entirely and use [`KMeansQuantizer`] directly.

mod error;
mod kmeans_quantizer;
mod swatch;

pub const DEFAULT_CLUSTER_COUNT: usize = 5;
pub const DEFAULT_MAX_ITERATIONS: usize = 10;
pub const DEFAULT_RESIZE_IMAGE_WIDTH: u32 = 200;

pub use crate::{
    error::{QuantizeError, Result},
    kmeans_quantizer::KMeansQuantizer,
    swatch::Swatch,
};
pub use image;

use image::ImageBuffer;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    swatches: Vec<Swatch>,
}

pub struct PaletteBuilder<P>
where
    P: image::Pixel<Subpixel = u8> + 'static,
{
    image: ImageBuffer<P, Vec<<P as image::Pixel>::Subpixel>>,
    cluster_count: usize,
    max_iterations: usize,
    resize_width: u32,
    seed: Option<u64>,
}

impl Palette {
    pub fn from_image<P>(image: ImageBuffer<P, Vec<<P as image::Pixel>::Subpixel>>) -> PaletteBuilder<P>
    where
        P: image::Pixel<Subpixel = u8> + 'static,
    {
        PaletteBuilder::from_image(image)
    }

    /// The extracted swatches, in cluster index order.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    pub fn dominant_swatch(&self) -> Option<Swatch> {
        self.swatches
            .iter()
            .max_by_key(|swatch| swatch.population())
            .copied()
    }

    pub fn dominant_color(&self) -> Option<(u8, u8, u8)> {
        self.dominant_swatch().map(|swatch| swatch.rgb())
    }
}

impl<P> PaletteBuilder<P>
where
    P: image::Pixel<Subpixel = u8> + 'static,
{
    pub fn from_image(image: ImageBuffer<P, Vec<<P as image::Pixel>::Subpixel>>) -> Self {
        Self {
            image,
            cluster_count: DEFAULT_CLUSTER_COUNT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            resize_width: DEFAULT_RESIZE_IMAGE_WIDTH,
            seed: None,
        }
    }

    pub fn cluster_count(self, cluster_count: usize) -> Self {
        Self { cluster_count, ..self }
    }

    pub fn max_iterations(self, max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    /// Bound the image width before sampling. Images wider than this are scaled down, keeping
    /// their aspect ratio; narrower images are left alone. Pass 0 to disable the bound.
    pub fn resize_width(self, resize_width: u32) -> Self {
        Self { resize_width, ..self }
    }

    /// Seed the centroid-seeding random source for reproducible palettes.
    pub fn seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    pub fn generate(mut self) -> Result<Palette> {
        self.scale_image_down();

        let samples = self.image.pixels().map(pixel_to_rgb).collect();
        let quantizer = KMeansQuantizer::new(samples, self.cluster_count, self.max_iterations)?;

        let swatches = match self.seed {
            Some(seed) => quantizer.get_quantized_colors(&mut ChaCha8Rng::seed_from_u64(seed)),
            None => quantizer.get_quantized_colors(&mut rand::thread_rng()),
        };

        Ok(Palette { swatches })
    }

    fn scale_image_down(&mut self)
    where
        <P as image::Pixel>::Subpixel: 'static,
    {
        let (width, height) = self.image.dimensions();

        if self.resize_width > 0 && width > self.resize_width {
            let scale_ratio = self.resize_width as f32 / width as f32;

            self.image = image::imageops::resize(
                &self.image,
                self.resize_width,
                (height as f32 * scale_ratio).ceil() as u32,
                image::imageops::FilterType::Nearest,
            );
        }
    }
}

fn pixel_to_rgb<P>(pixel: &P) -> (u8, u8, u8)
where
    P: image::Pixel<Subpixel = u8>,
{
    let rgb = pixel.to_rgb();
    (rgb.0[0], rgb.0[1], rgb.0[2])
}
