use crate::core::{RemedialTimetable, ScheduleRenderer};
use crate::domain::model::{ScheduleRow, COLUMN_HEADERS};
use crate::utils::error::{Result, TimetableError};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

const MM: f32 = 72.0 / 25.4;
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 10.0 * MM;
const ROW_HEIGHT: f32 = 10.0 * MM;
const COLUMN_WIDTHS: [f32; 3] = [50.0 * MM, 70.0 * MM, 70.0 * MM];
const CELL_PADDING: f32 = 1.5 * MM;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;
const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";

/// A4 PDF table: centred bold title, bold header row, bordered cells.
#[derive(Debug, Clone, Copy)]
pub struct PdfRenderer {
    rows_per_page: usize,
}

impl Default for PdfRenderer {
    fn default() -> Self {
        // Reserve the title and header rows, data rows fill the rest.
        let usable = PAGE_HEIGHT - 2.0 * MARGIN - 2.0 * ROW_HEIGHT;
        Self {
            rows_per_page: (usable / ROW_HEIGHT) as usize,
        }
    }
}

fn render_error(e: impl std::fmt::Display) -> TimetableError {
    TimetableError::RenderError {
        format: "pdf".to_string(),
        message: e.to_string(),
    }
}

fn text_at(ops: &mut Vec<Operation>, font: &str, size: f32, x: f32, y: f32, text: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new("Tj", vec![Object::string_literal(text)]));
    ops.push(Operation::new("ET", vec![]));
}

fn table_row(ops: &mut Vec<Operation>, font: &str, top: f32, cells: [&str; 3]) {
    let table_width: f32 = COLUMN_WIDTHS.iter().sum();
    let mut x = (PAGE_WIDTH - table_width) / 2.0;
    let bottom = top - ROW_HEIGHT;

    for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
        ops.push(Operation::new(
            "re",
            vec![x.into(), bottom.into(), width.into(), ROW_HEIGHT.into()],
        ));
        ops.push(Operation::new("S", vec![]));
        let baseline = bottom + (ROW_HEIGHT - BODY_SIZE) / 2.0 + 2.0;
        text_at(ops, font, BODY_SIZE, x + CELL_PADDING, baseline, cell);
        x += width;
    }
}

impl PdfRenderer {
    fn page_content(&self, title: Option<&str>, rows: &[ScheduleRow]) -> Content {
        let mut ops = vec![Operation::new("w", vec![0.5_f32.into()])];
        let mut top = PAGE_HEIGHT - MARGIN;

        if let Some(title) = title {
            // Helvetica averages roughly half an em per glyph.
            let approx_width = title.chars().count() as f32 * TITLE_SIZE * 0.5;
            let x = (PAGE_WIDTH - approx_width) / 2.0;
            text_at(&mut ops, BOLD_FONT, TITLE_SIZE, x, top - ROW_HEIGHT + 4.0, title);
            top -= ROW_HEIGHT;
        }

        table_row(&mut ops, BOLD_FONT, top, COLUMN_HEADERS);
        top -= ROW_HEIGHT;

        for row in rows {
            table_row(&mut ops, REGULAR_FONT, top, row.cells());
            top -= ROW_HEIGHT;
        }

        Content { operations: ops }
    }

    fn font(doc: &mut Document, base_font: &str) -> ObjectId {
        doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base_font,
            "Encoding" => "WinAnsiEncoding",
        })
    }
}

impl ScheduleRenderer for PdfRenderer {
    fn format(&self) -> &'static str {
        "pdf"
    }

    fn default_file_name(&self) -> &'static str {
        "remedial_timetable.pdf"
    }

    fn render(&self, timetable: &RemedialTimetable) -> Result<Vec<u8>> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular = Self::font(&mut doc, "Helvetica");
        let bold = Self::font(&mut doc, "Helvetica-Bold");
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                REGULAR_FONT => regular,
                BOLD_FONT => bold,
            },
        });

        let chunks: Vec<&[ScheduleRow]> = if timetable.rows.is_empty() {
            vec![&timetable.rows[..]]
        } else {
            timetable.rows.chunks(self.rows_per_page.max(1)).collect()
        };

        let mut kids: Vec<Object> = Vec::with_capacity(chunks.len());
        for (index, rows) in chunks.into_iter().enumerate() {
            let title = (index == 0).then_some(timetable.title.as_str());
            let content = self.page_content(title, rows);
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().map_err(render_error)?,
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).map_err(render_error)?;
        Ok(buffer)
    }
}
