use laneview::draw::{CairoCanvas, Canvas, RecordingCanvas, WHITE};
use laneview::road::{RoadStyle, TrackLayout};
use laneview::scenario::Scenario;
use laneview::scene::{DrawContext, Scene};

fn draw_once(json: &str, style: &RoadStyle, canvas: &mut dyn Canvas) -> Result<(), String> {
    let simulation = Scenario::from_json_str(json)
        .and_then(|scenario| scenario.build(60, 10.0))
        .map_err(|err| err.to_string())?;
    let scene = Scene::for_road(simulation.road(), WHITE);
    let mut ctx = DrawContext {
        canvas,
        style,
        road: simulation.road(),
        cars: simulation.cars(),
    };
    scene.draw(&mut ctx).map_err(|err| err.to_string())
}

fn surface_pixel(surface: &mut cairo::ImageSurface, x: usize, y: usize) -> [u8; 3] {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y * stride + x * 4;
    let word = u32::from_ne_bytes(data[offset..offset + 4].try_into().unwrap());
    [(word >> 16) as u8, (word >> 8) as u8, word as u8]
}

#[test]
fn shoulder_general_general_track_has_two_dividers_and_three_lanes() {
    let json = r#"{ "pistas": [ { "p1": [0, 0], "p2": [100, 0], "direcao": "leste",
        "faixas": [
            { "tipo": "acostamento", "sentido": "leste" },
            { "tipo": "geral", "sentido": "leste" },
            { "tipo": "geral", "sentido": "leste" } ] } ] }"#;
    let style = RoadStyle::default();
    let mut canvas = RecordingCanvas::new();
    draw_once(json, &style, &mut canvas).unwrap();

    let lanes = canvas.fills_with(style.shoulder).count() + canvas.fills_with(style.general_lane).count();
    assert_eq!(lanes, 3);

    let dividers: Vec<_> = canvas
        .fills
        .iter()
        .filter(|op| op.color == style.divider_shoulder || op.color == style.divider_same_direction)
        .collect();
    assert_eq!(dividers.len(), 2);
    assert_eq!(dividers[0].color, style.divider_shoulder);
    assert_eq!(dividers[1].color, style.divider_same_direction);
    assert_eq!(canvas.presents, 1);
}

#[test]
fn consecutive_shoulders_abort_before_second_lane() {
    let json = r#"{ "pistas": [ { "p1": [0, 0], "p2": [100, 0], "direcao": "leste",
        "faixas": [
            { "tipo": "acostamento", "sentido": "leste" },
            { "tipo": "acostamento", "sentido": "leste" } ] } ] }"#;
    let style = RoadStyle::default();
    let mut canvas = RecordingCanvas::new();
    let err = draw_once(json, &style, &mut canvas).unwrap_err();

    assert!(err.contains("consecutive shoulder"), "{err}");
    assert_eq!(canvas.fills.len(), 1);
    assert_eq!(canvas.presents, 0);
}

#[test]
fn tiled_lanes_render_visible_bands_on_cairo_surface() {
    let json = r#"{ "pistas": [ { "p1": [10, 10], "p2": [90, 30], "direcao": "leste",
        "faixas": [
            { "tipo": "acostamento", "sentido": "leste" },
            { "tipo": "geral", "sentido": "leste" } ] } ] }"#;
    let style = RoadStyle {
        lane_width: 20,
        ..RoadStyle::default()
    };
    let mut canvas = CairoCanvas::new(100, 100, None).unwrap();
    draw_once(json, &style, &mut canvas).unwrap();

    let mut surface = canvas.into_surface();
    let shoulder = style.shoulder;
    let general = style.general_lane;
    let divider = style.divider_shoulder;
    // Shoulder covers y 10..30, divider band y 32..52 is overdrawn by the lane.
    assert_eq!(surface_pixel(&mut surface, 50, 20), [shoulder.r, shoulder.g, shoulder.b]);
    assert_eq!(surface_pixel(&mut surface, 50, 40), [general.r, general.g, general.b]);
    assert_ne!(surface_pixel(&mut surface, 50, 40), [divider.r, divider.g, divider.b]);
    assert_eq!(surface_pixel(&mut surface, 5, 5), [255, 255, 255]);
}

#[test]
fn layout_offsets_match_divider_steps_for_every_track() {
    let json = r#"{ "pistas": [
        { "p1": [0, 0], "p2": [100, 0], "direcao": "leste",
          "faixas": [ { "tipo": "geral", "sentido": "leste" },
                      { "tipo": "geral", "sentido": "oeste" } ] },
        { "p1": [0, 0], "p2": [0, 100], "direcao": "norte",
          "faixas": [ { "tipo": "acostamento", "sentido": "norte" },
                      { "tipo": "geral", "sentido": "norte" },
                      { "tipo": "acostamento", "sentido": "norte" } ] } ] }"#;
    let scenario = Scenario::from_json_str(json).unwrap();
    let road = scenario.road();
    let style = RoadStyle::default();
    let offsets: Vec<Vec<i32>> = road
        .tracks()
        .map(|(_, track)| TrackLayout::lane_offsets(track, &style).unwrap())
        .collect();
    assert_eq!(offsets, vec![vec![0, 2], vec![0, 2, 4]]);
}

#[test]
fn scenario_with_extreme_coordinates_draws_without_overflow() {
    let json = r#"{ "pistas": [ { "p1": [-2000000000, 0], "p2": [2000000000, 0], "direcao": "leste",
        "faixas": [
            { "tipo": "acostamento", "sentido": "leste" },
            { "tipo": "geral", "sentido": "oeste" } ] } ],
        "carros": [ { "nome": "far", "pista": 0, "faixa": 1, "posicao": 1000.0,
            "velocidade": 0.0, "destino": [0, 0] } ] }"#;
    let style = RoadStyle::default();
    let mut canvas = RecordingCanvas::new();
    draw_once(json, &style, &mut canvas).unwrap();

    assert!(canvas.fills.iter().all(|op| op.rect.width >= 0 && op.rect.height >= 0));
    let shoulder = canvas.fills_with(style.shoulder).next().unwrap();
    assert_eq!(shoulder.rect.width, i32::MAX);
}
