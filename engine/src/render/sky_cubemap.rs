//! Sky Cubemap - 6-face cubemap texture for the skybox
//!
//! Loads six PNG or JPEG face images from a directory and uploads them as a
//! cubemap. Faces follow the usual naming: px, nx, py, ny, pz, nz. Loading
//! returns a `Result` so the viewer can fall back to the procedural gradient
//! sky when no skybox assets are installed.

use std::fmt;
use std::path::{Path, PathBuf};

/// Face file stems in cubemap layer order (+X, -X, +Y, -Y, +Z, -Z).
const FACE_STEMS: [&str; 6] = ["px", "nx", "py", "ny", "pz", "nz"];

/// Extensions tried for each face, in order.
const FACE_EXTENSIONS: [&str; 2] = ["png", "jpg"];

/// Errors produced when loading skybox faces from disk.
#[derive(Debug)]
pub enum SkyboxError {
    /// A face file was not found under any supported extension.
    MissingFace {
        /// Face stem, e.g. "px".
        face: &'static str,
        /// Directory that was searched.
        dir: PathBuf,
    },
    /// A face file could not be decoded.
    Image(image::ImageError),
    /// A face is not square.
    NotSquare {
        face: &'static str,
        width: u32,
        height: u32,
    },
    /// A face does not match the size of the first face.
    SizeMismatch {
        face: &'static str,
        expected: u32,
        actual: u32,
    },
}

impl fmt::Display for SkyboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkyboxError::MissingFace { face, dir } => {
                write!(f, "skybox face '{face}' not found in {}", dir.display())
            }
            SkyboxError::Image(e) => write!(f, "failed to decode skybox face: {e}"),
            SkyboxError::NotSquare { face, width, height } => {
                write!(f, "skybox face '{face}' must be square, got {width}x{height}")
            }
            SkyboxError::SizeMismatch { face, expected, actual } => {
                write!(
                    f,
                    "skybox face '{face}' is {actual}px but the first face was {expected}px"
                )
            }
        }
    }
}

impl std::error::Error for SkyboxError {}

impl From<image::ImageError> for SkyboxError {
    fn from(e: image::ImageError) -> Self {
        SkyboxError::Image(e)
    }
}

/// Holds a cubemap texture (6 faces), cube texture view, and linear sampler
/// for sky rendering.
pub struct SkyCubemap {
    pub texture: wgpu::Texture,
    pub cube_view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub size: u32,
}

impl SkyCubemap {
    /// Create an empty cubemap texture of the given face resolution.
    fn create(device: &wgpu::Device, size: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("sky_cubemap"),
            size: wgpu::Extent3d {
                width: size,
                height: size,
                depth_or_array_layers: 6,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let cube_view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("sky_cubemap_cube_view"),
            dimension: Some(wgpu::TextureViewDimension::Cube),
            array_layer_count: Some(6),
            ..Default::default()
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("sky_cubemap_sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            ..Default::default()
        });

        Self {
            texture,
            cube_view,
            sampler,
            size,
        }
    }

    /// Create a 1x1 neutral-sky placeholder cubemap.
    ///
    /// Used when no skybox assets are installed; the shader renders the
    /// procedural gradient sky instead and never samples this texture with
    /// `use_skybox` set to 0.
    pub fn placeholder(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let cubemap = Self::create(device, 1);
        let pixel: [u8; 4] = [140, 170, 220, 255];
        for layer in 0..6 {
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &cubemap.texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d {
                        x: 0,
                        y: 0,
                        z: layer,
                    },
                    aspect: wgpu::TextureAspect::All,
                },
                &pixel,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4),
                    rows_per_image: Some(1),
                },
                wgpu::Extent3d {
                    width: 1,
                    height: 1,
                    depth_or_array_layers: 1,
                },
            );
        }
        cubemap
    }

    /// Load a cubemap from six face images in a directory.
    ///
    /// Expects files named `px`, `nx`, `py`, `ny`, `pz`, `nz` with a `.png`
    /// or `.jpg` extension. All faces must be square and the same size.
    pub fn from_files(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        dir: &Path,
    ) -> Result<Self, SkyboxError> {
        // Decode the first face to learn the cubemap resolution
        let first = load_face_image(dir, FACE_STEMS[0])?;
        let size = first.width();
        let cubemap = Self::create(device, size);
        upload_face(queue, &cubemap.texture, 0, size, &first);

        for (layer, &face) in FACE_STEMS.iter().enumerate().skip(1) {
            let img = load_face_image(dir, face)?;
            if img.width() != size {
                return Err(SkyboxError::SizeMismatch {
                    face,
                    expected: size,
                    actual: img.width(),
                });
            }
            upload_face(queue, &cubemap.texture, layer as u32, size, &img);
        }

        println!(
            "[SkyCubemap] Loaded skybox from {} ({size}x{size} per face)",
            dir.display()
        );
        Ok(cubemap)
    }

    /// Returns bind group entries for the cubemap view and its sampler,
    /// starting at the given binding index.
    pub fn bind_group_entries(&self, base_binding: u32) -> [wgpu::BindGroupEntry<'_>; 2] {
        [
            wgpu::BindGroupEntry {
                binding: base_binding,
                resource: wgpu::BindingResource::TextureView(&self.cube_view),
            },
            wgpu::BindGroupEntry {
                binding: base_binding + 1,
                resource: wgpu::BindingResource::Sampler(&self.sampler),
            },
        ]
    }
}

/// Find a face file under one of the supported extensions.
fn find_face_file(dir: &Path, stem: &str) -> Option<PathBuf> {
    FACE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .find(|path| path.is_file())
}

/// Locate, decode, and square-check one face image.
fn load_face_image(
    dir: &Path,
    face: &'static str,
) -> Result<image::RgbaImage, SkyboxError> {
    let path = find_face_file(dir, face).ok_or(SkyboxError::MissingFace {
        face,
        dir: dir.to_path_buf(),
    })?;
    let img = image::open(&path)?.to_rgba8();
    if img.width() != img.height() {
        return Err(SkyboxError::NotSquare {
            face,
            width: img.width(),
            height: img.height(),
        });
    }
    Ok(img)
}

/// Upload one decoded face into a cubemap layer.
fn upload_face(
    queue: &wgpu::Queue,
    texture: &wgpu::Texture,
    layer: u32,
    size: u32,
    img: &image::RgbaImage,
) {
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d {
                x: 0,
                y: 0,
                z: layer,
            },
            aspect: wgpu::TextureAspect::All,
        },
        img,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * size),
            rows_per_image: Some(size),
        },
        wgpu::Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_order_matches_cubemap_layers() {
        // +X, -X, +Y, -Y, +Z, -Z is the wgpu cube layer order
        assert_eq!(FACE_STEMS, ["px", "nx", "py", "ny", "pz", "nz"]);
    }

    #[test]
    fn test_find_face_file_missing_dir() {
        assert!(find_face_file(Path::new("does/not/exist"), "px").is_none());
    }

    #[test]
    fn test_skybox_error_display() {
        let err = SkyboxError::MissingFace {
            face: "px",
            dir: PathBuf::from("assets/skybox"),
        };
        let message = err.to_string();
        assert!(message.contains("px"));
        assert!(message.contains("assets/skybox"));
    }
}
