// src/main.rs
use nannou::prelude::*;
use nannou_audio as audio;
use std::time::Instant;

use madmen_credits::{
    config::Config,
    draw::{CreditsTextures, NannouSurface},
    models::CanvasSize,
    services::{AssetEvent, AssetLoader, Playback, Soundtrack},
    utilities::generate_noise_frames,
    views::{CreditsDirector, DirectorCommand},
};

struct Model {
    config: Config,
    canvas: CanvasSize,

    // Credits
    director: CreditsDirector,
    loader: AssetLoader,
    textures: CreditsTextures,

    // Audio
    audio_host: audio::Host,
    soundtrack: Option<Soundtrack>,
    audio_stream: Option<audio::Stream<Playback>>, // plays until dropped

    // Rendering components:
    texture: wgpu::Texture,
    draw: nannou::Draw,
    draw_renderer: nannou::draw::Renderer,
    texture_reshaper: wgpu::TextureReshaper,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    env_logger::init();

    // Load config
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("No usable config.toml ({}), using defaults", e);
        Config::default()
    });
    let (canvas_width, canvas_height) = config.canvas_size();

    // Create window
    let window_id = app
        .new_window()
        .title("Mad Men credits")
        .size(config.window.width, config.window.height)
        .msaa_samples(1)
        .view(view)
        .build()
        .expect("Failed to build window");
    let window = app.window(window_id).expect("Window vanished after creation");

    // Set up render texture
    let device = window.device();
    let draw = nannou::Draw::new();
    let texture = wgpu::TextureBuilder::new()
        .size([
            config.rendering.texture_width,
            config.rendering.texture_height,
        ])
        // RENDER_ATTACHMENT for the `Draw` render pass, sampled by the `TextureReshaper`.
        .usage(wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING)
        .sample_count(config.rendering.texture_samples)
        .format(wgpu::TextureFormat::Rgba16Float)
        .build(device);

    // Set up rendering pipeline
    let draw_renderer = nannou::draw::RendererBuilder::new()
        .build_from_texture_descriptor(device, texture.descriptor());
    let sample_count = window.msaa_samples();

    // Create the texture reshaper.
    let texture_view = texture.view().build();
    let texture_sample_count = texture.sample_count();
    let texture_sample_type = texture.sample_type();
    let dst_format = Frame::TEXTURE_FORMAT;
    let texture_reshaper = wgpu::TextureReshaper::new(
        device,
        &texture_view,
        texture_sample_count,
        texture_sample_type,
        sample_count,
        dst_format,
    );

    // Nothing plays until the soundtrack is decoded
    let loader = AssetLoader::new();
    loader.load_soundtrack(config.resolve_soundtrack_path());

    Model {
        canvas: CanvasSize::new(canvas_width, canvas_height),
        director: CreditsDirector::new(&config),
        loader,
        textures: CreditsTextures::new(),

        audio_host: audio::Host::new(),
        soundtrack: None,
        audio_stream: None,

        texture,
        draw,
        draw_renderer,
        texture_reshaper,

        config,
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();

    handle_asset_events(app, model, now);

    // The canvas is cleared every frame
    model.draw.reset();
    let [r, g, b] = model.config.style.clear_color;
    model.draw.background().color(rgb(r, g, b));

    let window = app.main_window();
    let device = window.device();
    let ce_desc = wgpu::CommandEncoderDescriptor {
        label: Some("Credits renderer"),
    };
    let mut encoder = device.create_command_encoder(&ce_desc);

    /*********************  Main update for the credits **********************/
    {
        let mut surface = NannouSurface {
            draw: &model.draw,
            canvas: model.canvas,
            textures: &mut model.textures,
            device,
            encoder: &mut encoder,
            arc_resolution: model.config.rendering.arc_resolution as usize,
        };
        model.director.tick(&mut surface, now);
    }
    /*************************************************************************/

    launch_commands(app, model);

    // Render to texture
    let texture_view = model.texture.view().build();
    model.draw_renderer.encode_render_pass(
        device,
        &mut encoder,
        &model.draw,
        1.0,
        model.texture.size(),
        &texture_view,
        None,
    );

    window.queue().submit(Some(encoder.finish()));
}

// Draw the state of Model into the given Frame
fn view(_app: &App, model: &Model, frame: Frame) {
    //resize texture to screen
    let mut encoder = frame.command_encoder();

    model
        .texture_reshaper
        .encode_render_pass(frame.texture_view(), &mut encoder);
}

// ******************************* Asset Events *******************************

fn handle_asset_events(app: &App, model: &mut Model, now: Instant) {
    for event in model.loader.poll() {
        match event {
            AssetEvent::SoundtrackReady(soundtrack) => {
                model.soundtrack = Some(soundtrack);
                model.director.on_soundtrack_ready();
            }
            AssetEvent::SpriteSheetLoaded(sprites) => {
                model.textures.set_sprites(app, sprites);
                model
                    .director
                    .on_sprite_sheet_loaded(model.textures.sprite_sizes(), now);
            }
            AssetEvent::FinalImageLoaded(image) => {
                let window = app.main_window();
                model.textures.set_final_image(window.device(), image);
                model.director.on_final_image_loaded();
            }
            AssetEvent::Failed { asset, error } => {
                log::error!("{} is unavailable: {}", asset.display(), error);
            }
        }
    }
}

// ******************************* Director Commands *******************************

fn launch_commands(app: &App, model: &mut Model) {
    for command in model.director.take_commands() {
        match command {
            DirectorCommand::GenerateNoise {
                frames,
                width,
                height,
            } => {
                let start = Instant::now();
                let noise = generate_noise_frames(width, height, frames);
                log::debug!("Generated {} noise frames in {:?}", frames, start.elapsed());

                let window = app.main_window();
                model.textures.set_noise_frames(window.device(), noise);
            }
            DirectorCommand::LoadImages => {
                model.loader.load_images(
                    model.config.resolve_sprite_sheet_path(),
                    model.config.resolve_final_image_path(),
                );
            }
            DirectorCommand::PlayAudio => match &model.soundtrack {
                Some(soundtrack) => match soundtrack.play(&model.audio_host) {
                    Ok(stream) => model.audio_stream = Some(stream),
                    Err(e) => log::error!("Soundtrack won't play: {}", e),
                },
                None => log::warn!("Audio cue fired without a soundtrack"),
            },
        }
    }
}
