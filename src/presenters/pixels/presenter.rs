use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::controllers::preview::{PreviewEvent, PreviewPresenterPort};
use crate::input::gui::events::GuiEvent;
use crate::input::gui::ports::GuiPresenterPort;
use crate::presenters::pixels::adapter::PreviewAdapter;
use crate::presenters::pixels::svg::{self, RasterImage};

/// Shows the rasterized preview in the pixels framebuffer with the egui
/// control panel composited on top.
///
/// Keeps the last successfully rasterized image; a failed refresh or an
/// unreadable output file only updates the status message, so the display
/// stays stale-but-valid.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PreviewAdapter>,
    width: u32,
    height: u32,
    preview: Option<RasterImage>,
    /// Path of the image currently shown, kept for re-rasterizing on resize.
    preview_source: Option<PathBuf>,
    last_presented_generation: u64,
    last_error_message: Option<String>,
    last_render_duration: Option<Duration>,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(window: &'static Window, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .expect("Failed to create pixels surface");

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PreviewAdapter::new(event_loop_proxy)),
            width: size.width,
            height: size.height,
            preview: None,
            preview_source: None,
            last_presented_generation: 0,
            last_error_message: None,
            last_render_duration: None,
        }
    }

    fn share_adapter(&self) -> Arc<dyn PreviewPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn PreviewPresenterPort>
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.apply_pending_event();
        self.draw_preview();

        self.pixels.render_with(|encoder, render_target, context| {
            // The scaling pass blits the framebuffer to the surface.
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the preview underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        self.pixels
            .resize_surface(width, height)
            .expect("Failed to resize surface");

        self.pixels
            .resize_buffer(width, height)
            .expect("Failed to resize buffer");

        // Re-fit the current preview to the new framebuffer.
        self.preview = self
            .preview_source
            .as_ref()
            .and_then(|path| svg::rasterize(path, width, height).ok());
    }

    fn status_message(&self) -> Option<String> {
        self.last_error_message.clone()
    }

    fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }
}

impl PixelsPresenter {
    /// Drains the adapter mailbox and reloads the preview image if a newer
    /// generation completed.
    fn apply_pending_event(&mut self) {
        let Some(event) = self.adapter.take_event() else {
            return;
        };

        match event {
            PreviewEvent::Refreshed(data) => {
                if data.generation <= self.last_presented_generation {
                    return;
                }

                match svg::rasterize(&data.image_path, self.width, self.height) {
                    Ok(image) => {
                        self.preview = Some(image);
                        self.preview_source = Some(data.image_path);
                        self.last_presented_generation = data.generation;
                        self.last_render_duration = Some(data.render_duration);
                        self.last_error_message = None;
                    }
                    Err(error) => {
                        // Undecodable output: keep the old image on screen.
                        self.last_error_message = Some(error.to_string());
                    }
                }
            }
            PreviewEvent::Failed(failure) => {
                if failure.generation >= self.last_presented_generation {
                    self.last_error_message = Some(failure.message);
                }
            }
        }
    }

    fn draw_preview(&mut self) {
        let frame = self.pixels.frame_mut();

        match &self.preview {
            Some(image)
                if image.width == self.width
                    && image.height == self.height
                    && image.rgba.len() == frame.len() =>
            {
                frame.copy_from_slice(&image.rgba);
            }
            _ => {
                // No preview yet (or a resize is mid-flight): neutral
                // background so the panel stays readable.
                for pixel in frame.chunks_exact_mut(4) {
                    pixel[0] = 245;
                    pixel[1] = 245;
                    pixel[2] = 245;
                    pixel[3] = 255;
                }
            }
        }
    }
}
