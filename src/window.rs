use anyhow::{anyhow, Context, Result};
use glutin::{
    config::ConfigTemplateBuilder,
    context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version},
    display::{GetGlDisplay, GlDisplay},
    prelude::*,
    surface::{Surface, SwapInterval, WindowSurface},
};
use glutin_winit::DisplayBuilder;
use glutin_winit::GlWindow as _;
use log::info;
use raw_window_handle::HasRawWindowHandle;
use std::{ffi::CString, num::NonZeroU32};
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event_loop::{EventLoop, EventLoopBuilder},
    window::{Window, WindowBuilder},
};

use crate::config::WindowConfig;

/// Window plus its current OpenGL context and surface.
///
/// Owned by the application entry point and passed by reference to anything
/// that needs it. All GL calls must stay on the thread this was created on.
pub struct GlWindow {
    pub window: Window,
    gl_context: PossiblyCurrentContext,
    gl_surface: Surface<WindowSurface>,
}

impl GlWindow {
    /// Opens the window, creates an OpenGL context of the configured
    /// version, makes it current and loads the GL function pointers.
    pub fn new(config: &WindowConfig) -> Result<(Self, EventLoop<()>)> {
        let event_loop = EventLoopBuilder::new().build()?;
        let window_builder = WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height));

        let template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_depth_size(24)
            .with_multisampling(config.samples);

        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));

        let (window, gl_config) = display_builder
            .build(&event_loop, template, |configs| {
                configs
                    .reduce(|accum, candidate| {
                        if candidate.num_samples() > accum.num_samples() {
                            candidate
                        } else {
                            accum
                        }
                    })
                    .unwrap()
            })
            .map_err(|e| anyhow!("Failed to build GL display: {e}"))?;

        let window = window.ok_or_else(|| anyhow!("Display builder returned no window"))?;
        let raw_window_handle = window.raw_window_handle();

        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(
                config.gl_major,
                config.gl_minor,
            ))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_window_handle));

        let gl_display = gl_config.display();

        let gl_context = unsafe {
            gl_display
                .create_context(&gl_config, &context_attributes)
                .context("Failed to create OpenGL context")?
        };

        let attrs = window.build_surface_attributes(<_>::default());
        let gl_surface = unsafe {
            gl_display
                .create_window_surface(&gl_config, &attrs)
                .context("Failed to create GL surface")?
        };

        let gl_context = gl_context
            .make_current(&gl_surface)
            .context("Failed to make context current")?;

        // Load OpenGL functions
        gl::load_with(|symbol| {
            let symbol = CString::new(symbol).unwrap();
            gl_display.get_proc_address(symbol.as_c_str()) as *const _
        });

        if config.vsync {
            if let Some(interval) = NonZeroU32::new(1) {
                gl_surface
                    .set_swap_interval(&gl_context, SwapInterval::Wait(interval))
                    .context("Failed to enable vsync")?;
            }
        }

        info!(
            "Opened {}x{} window with OpenGL {}.{} core context",
            config.width, config.height, config.gl_major, config.gl_minor
        );

        Ok((
            Self {
                window,
                gl_context,
                gl_surface,
            },
            event_loop,
        ))
    }

    pub fn resize(&self, size: PhysicalSize<u32>) {
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        self.gl_surface.resize(&self.gl_context, width, height);
        unsafe {
            gl::Viewport(0, 0, size.width as i32, size.height as i32);
        }
    }

    pub fn swap_buffers(&self) -> Result<()> {
        self.gl_surface
            .swap_buffers(&self.gl_context)
            .context("Failed to swap buffers")
    }

    pub fn aspect_ratio(&self) -> f32 {
        let size = self.window.inner_size();
        if size.height == 0 {
            return 1.0;
        }
        size.width as f32 / size.height as f32
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}
