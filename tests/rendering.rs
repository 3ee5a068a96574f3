use room_view::logging::MemorySink;
use room_view::{
    Alignment, AnsiRenderer, BorderStyle, Bordered, Color, Container, Direction, LayoutError,
    LogLevel, Logger, OutputSink, Padded, RenderSettings, SizeSpec, Spacer, Style, Text, View,
    WrapPolicy, WriterSink, wrap,
};
use serde_json::json;

#[test]
fn word_wrap_packs_greedily_with_spaces_counted() {
    let lines = wrap("Hello World This is a test", 10, WrapPolicy::Word).unwrap();
    assert_eq!(lines, vec!["Hello", "World This", "is a test"]);
}

#[test]
fn ellipsis_keeps_the_prefix() {
    let lines = wrap("abcdefgh", 5, WrapPolicy::TruncateWithEllipsis).unwrap();
    assert_eq!(lines, vec!["ab..."]);
}

#[test]
fn bordered_three_by_one_is_five_by_three() {
    let canvas = View::bordered(View::primitive_text("abc")).render().unwrap();
    assert_eq!((canvas.width(), canvas.height()), (5, 3));
    assert_eq!(canvas.get(0, 0).ch(), '┌');
    assert_eq!(canvas.get(4, 0).ch(), '┐');
    assert_eq!(canvas.get(0, 2).ch(), '└');
    assert_eq!(canvas.get(4, 2).ch(), '┘');
    assert_eq!(canvas.row_text(1).as_deref(), Some("│abc│"));
}

#[test]
fn rounded_border_with_padding() {
    let view: View = Bordered::new(View::primitive_text("x"))
        .with_padding(1)
        .with_border_style(BorderStyle::Rounded)
        .with_border_color(Color::YELLOW)
        .into();
    let canvas = view.render().unwrap();
    assert_eq!(
        canvas.to_plain_lines(),
        vec!["╭───╮", "│   │", "│ x │", "│   │", "╰───╯"]
    );
    assert_eq!(canvas.get(0, 0).style().fg(), Color::YELLOW);
    assert_eq!(canvas.get(2, 2).style().fg(), Color::DEFAULT);
}

#[test]
fn flattened_frame_is_height_lines_each_ending_in_reset() {
    let frame = View::rows([View::primitive_text("ab"), View::primitive_text("c")])
        .render_to_string()
        .unwrap();
    let lines: Vec<&str> = frame.split_terminator('\n').collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        assert!(line.ends_with("\u{1b}[0m"));
        assert_eq!(room_view::display_width(line), 2);
    }
}

#[test]
fn dashboard_layout_composes_fill_columns() {
    let sidebar: View = Container::new(Direction::Rows)
        .with_width(SizeSpec::Fixed(6))
        .with_children([View::primitive_text("menu"), View::primitive_text("help")])
        .into();
    let body: View = Text::new("one two three four")
        .with_width(SizeSpec::Fill)
        .into();
    let main: View = Container::new(Direction::Rows)
        .with_width(SizeSpec::Fixed(9))
        .with_children([body])
        .into();
    let view: View = Container::new(Direction::Columns)
        .with_spacing(1)
        .with_children([sidebar, main])
        .into();

    let canvas = view.render().unwrap();
    assert_eq!(
        canvas.to_plain_lines(),
        vec!["menu   one two  ", "help   three    ", "       four     "]
    );
}

#[test]
fn centered_rows_offset_narrow_children() {
    let view: View = Container::new(Direction::Rows)
        .with_alignment(Alignment::Center)
        .with_children([View::primitive_text("wide!"), View::primitive_text("x")])
        .into();
    let canvas = view.render().unwrap();
    assert_eq!(canvas.to_plain_lines(), vec!["wide!", "  x  "]);
}

#[test]
fn padded_fill_child_gets_the_inset_extent() {
    let inner: View = Spacer::new(SizeSpec::Fill, SizeSpec::Fixed(1)).into();
    let padded: View = Padded::new(inner, 2).into();
    let view: View = Container::new(Direction::Rows)
        .with_width(SizeSpec::Fixed(10))
        .with_children([padded])
        .into();
    let canvas = view.render().unwrap();
    assert_eq!((canvas.width(), canvas.height()), (10, 5));
}

#[test]
fn padded_without_exactly_one_child_is_a_configuration_error() {
    let padded = Padded {
        children: Vec::new(),
        ..Padded::new(View::spacer(1, 1), 1)
    };
    let err = View::from(padded).render().unwrap_err();
    assert!(matches!(err, LayoutError::ChildCount { kind: "padded", found: 0 }));
    assert!(err.is_configuration());
}

#[test]
fn bordered_without_content_fails() {
    let err = View::from(Bordered::default()).render().unwrap_err();
    assert!(matches!(err, LayoutError::MissingContent { kind: "bordered" }));
}

#[test]
fn render_events_reach_the_logger() {
    let sink = MemorySink::new();
    let settings = RenderSettings::default().with_logger(Logger::new(sink.clone()));

    let view = View::rows([View::text("hello"), View::spacer(2, 1)]);
    view.render_with(&settings).unwrap();

    let broken: View = Text::new("x").with_width(SizeSpec::Fill).into();
    assert!(broken.render_with(&settings).is_err());

    let events = sink.events();
    assert_eq!(sink.messages(), vec!["render_complete", "render_failed"]);
    assert_eq!(events[0].target, "room_view::render");
    assert_eq!(events[0].field("width"), Some(&json!(5)));
    assert_eq!(events[0].field("height"), Some(&json!(2)));
    assert_eq!(events[1].level, LogLevel::Error);
    assert_eq!(events[1].field("configuration"), Some(&json!(true)));
}

#[test]
fn quieter_logger_drops_debug_events() {
    let sink = MemorySink::new();
    let logger = Logger::new(sink.clone()).with_min_level(LogLevel::Warn);
    let settings = RenderSettings::default().with_logger(logger);
    View::text("ok").render_with(&settings).unwrap();
    assert!(sink.events().is_empty());
}

#[test]
fn styled_text_reaches_the_writer_sink() {
    let view: View = Text::new("go")
        .with_style(Style::new().bold().with_fg(Color::rgb(1, 2, 3)))
        .into();
    let frame = view.render_to_string().unwrap();
    let mut out = WriterSink::new(Vec::new(), AnsiRenderer::with_default());
    out.present(&frame).unwrap();
    let written = String::from_utf8(out.into_inner()).unwrap();
    assert!(written.contains("\u{1b}[1m"));
    assert!(written.contains("\u{1b}[38;2;1;2;3m"));
    assert!(written.contains('g'));
}
