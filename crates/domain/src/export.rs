use crate::{Equipment, Muscle, Plan};

const CSV_HEADER: [&str; 11] = [
    "day_index",
    "day_label",
    "exercise_id",
    "exercise_name",
    "primary_muscles",
    "function",
    "equipment",
    "sets",
    "reps",
    "rest_seconds",
    "exrx_url",
];

const PAGE_WIDTH: u32 = 612;
const PAGE_HEIGHT: u32 = 792;
const MARGIN: u32 = 50;
const FONT_SIZE: u32 = 10;
const LEADING: u32 = 14;
const LINES_PER_PAGE: usize = ((PAGE_HEIGHT - 2 * MARGIN) / LEADING) as usize;

/// One row per exercise occurrence, lists joined by `;`.
#[must_use]
pub fn to_csv(plan: &Plan) -> Vec<u8> {
    let mut csv = String::new();
    push_csv_row(&mut csv, CSV_HEADER.iter().map(|h| (*h).to_string()));
    for day in &plan.days {
        for exercise in &day.exercises {
            push_csv_row(
                &mut csv,
                [
                    day.day_index.to_string(),
                    day.label.clone(),
                    exercise.id.to_string(),
                    exercise.name.clone(),
                    join_muscles(&exercise.primary_muscles, ";"),
                    exercise.function.clone(),
                    join_equipment(&exercise.equipment, ";"),
                    day.sets.to_string(),
                    day.reps.to_string(),
                    day.rest_seconds.to_string(),
                    exercise.external_link.clone(),
                ],
            );
        }
    }
    csv.into_bytes()
}

fn push_csv_row(csv: &mut String, fields: impl IntoIterator<Item = String>) {
    let row = fields
        .into_iter()
        .map(|field| {
            if field.contains([',', '"', '\n', '\r']) {
                format!("\"{}\"", field.replace('"', "\"\""))
            } else {
                field
            }
        })
        .collect::<Vec<_>>()
        .join(",");
    csv.push_str(&row);
    csv.push_str("\r\n");
}

#[must_use]
pub fn to_markdown(plan: &Plan) -> String {
    let mut lines = vec![format!("# Gym Plan ({} days)", plan.days.len())];
    for day in &plan.days {
        lines.push(String::new());
        lines.push(format!("## Day {}: {}", day.day_index + 1, day.label));
        lines.push(format!(
            "Sets: {}  Reps: {}  Rest: {}s",
            day.sets, day.reps, day.rest_seconds
        ));
        lines.push(String::new());
        for exercise in &day.exercises {
            lines.push(format!(
                "- [{}]({}) — {}; {}; {}",
                exercise.name,
                exercise.external_link,
                join_muscles(&exercise.primary_muscles, ", "),
                exercise.function,
                join_equipment(&exercise.equipment, ", ")
            ));
        }
    }
    if !plan.weekly_focus.is_empty() {
        lines.push(String::new());
        lines.push("### Weekly focus".to_string());
        for (muscle, count) in &plan.weekly_focus {
            lines.push(format!("- {muscle}: {count}"));
        }
    }
    lines.join("\n") + "\n"
}

/// Renders the Markdown export as plain text on US Letter pages.
#[must_use]
pub fn to_pdf(plan: &Plan) -> Vec<u8> {
    let lines = to_markdown(plan)
        .lines()
        .map(pdf_string)
        .collect::<Vec<_>>();
    let pages = lines.chunks(LINES_PER_PAGE).collect::<Vec<_>>();

    // 1: catalog, 2: page tree, 3: font, then a page and its content stream per page
    let page_id = |page: usize| 4 + 2 * page;
    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            (0..pages.len())
                .map(|p| format!("{} 0 R", page_id(p)))
                .collect::<Vec<_>>()
                .join(" "),
            pages.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];
    for (index, page) in pages.iter().enumerate() {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            page_id(index) + 1
        ));
        let mut stream = format!(
            "BT\n/F1 {FONT_SIZE} Tf\n{LEADING} TL\n{MARGIN} {} Td\n",
            PAGE_HEIGHT - MARGIN
        );
        for line in *page {
            stream.push_str(&format!("({line}) Tj\nT*\n"));
        }
        stream.push_str("ET");
        objects.push(format!(
            "<< /Length {} >>\nstream\n{stream}\nendstream",
            stream.len()
        ));
    }

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, object) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{object}\nendobj\n", index + 1));
    }
    let xref = pdf.len();
    pdf.push_str(&format!(
        "xref\n0 {}\n0000000000 65535 f \n",
        objects.len() + 1
    ));
    for offset in offsets {
        pdf.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.into_bytes()
}

/// Escapes a line for a PDF string literal. The standard font only covers ASCII.
fn pdf_string(line: &str) -> String {
    let mut escaped = String::with_capacity(line.len());
    for c in line.chars() {
        match c {
            '\\' | '(' | ')' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '—' | '–' => escaped.push('-'),
            ' '..='~' => escaped.push(c),
            _ => escaped.push('?'),
        }
    }
    escaped
}

fn join_muscles(muscles: &[Muscle], separator: &str) -> String {
    muscles
        .iter()
        .map(Muscle::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

fn join_equipment(equipment: &[Equipment], separator: &str) -> String {
    equipment
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        PlanSource,
        plan::tests::{day, exercise},
    };

    fn plan() -> Plan {
        let mut press = exercise("exrx:DBPress", "horizontal_push", &["chest", "triceps"]);
        press.name = "Press, \"Incline\"".to_string();
        press.equipment = vec![Equipment::Dumbbell, Equipment::Bodyweight];
        Plan::new(
            vec![
                day(0, vec![press]),
                day(1, vec![exercise("exrx:Squat", "squat", &["quads"])]),
            ],
            PlanSource::Local,
        )
    }

    #[test]
    fn test_to_csv() {
        assert_eq!(
            String::from_utf8(to_csv(&plan())).unwrap(),
            "day_index,day_label,exercise_id,exercise_name,primary_muscles,function,equipment,sets,reps,rest_seconds,exrx_url\r\n\
             0,Full Body,exrx:DBPress,\"Press, \"\"Incline\"\"\",chest;triceps,horizontal_push,dumbbell;bodyweight,3,10,90,https://exrx.net/exrx:DBPress\r\n\
             1,Full Body,exrx:Squat,exrx:Squat,quads,squat,dumbbell,3,10,90,https://exrx.net/exrx:Squat\r\n"
        );
    }

    #[test]
    fn test_to_markdown() {
        assert_eq!(
            to_markdown(&plan()),
            "# Gym Plan (2 days)\n\
             \n\
             ## Day 1: Full Body\n\
             Sets: 3  Reps: 10  Rest: 90s\n\
             \n\
             - [Press, \"Incline\"](https://exrx.net/exrx:DBPress) — chest, triceps; horizontal_push; dumbbell, bodyweight\n\
             \n\
             ## Day 2: Full Body\n\
             Sets: 3  Reps: 10  Rest: 90s\n\
             \n\
             - [exrx:Squat](https://exrx.net/exrx:Squat) — quads; squat; dumbbell\n\
             \n\
             ### Weekly focus\n\
             - chest: 1\n\
             - quads: 1\n\
             - triceps: 1\n"
        );
    }

    #[test]
    fn test_to_markdown_empty_plan() {
        assert_eq!(to_markdown(&Plan::default()), "# Gym Plan (0 days)\n");
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[rstest]
    #[case::single_page(1, 1)]
    #[case::several_pages(100, 3)]
    fn test_to_pdf(#[case] exercises: usize, #[case] expected_pages: usize) {
        let plan = Plan::new(
            vec![day(
                0,
                (0..exercises)
                    .map(|i| exercise(&format!("ex{i}"), "f", &["chest"]))
                    .collect(),
            )],
            PlanSource::Local,
        );

        let pdf = String::from_utf8(to_pdf(&plan)).unwrap();

        assert!(pdf.starts_with("%PDF-1.4\n"));
        assert!(pdf.ends_with("%%EOF\n"));
        assert_eq!(count(&pdf, "/Type /Page "), expected_pages);
        assert!(pdf.contains(&format!("/Count {expected_pages}")));
        assert!(pdf.contains("(# Gym Plan \\(1 days\\)) Tj"));
        assert!(pdf.contains("(- [ex0]\\(https://exrx.net/ex0\\) - chest; f; dumbbell) Tj"));

        let objects = 3 + 2 * expected_pages;
        let startxref = pdf.rsplit("startxref\n").next().unwrap();
        let xref = startxref.lines().next().unwrap().parse::<usize>().unwrap();
        let table = &pdf[xref..];
        assert!(table.starts_with(&format!("xref\n0 {}\n", objects + 1)));
        for (index, entry) in table.lines().skip(3).take(objects).enumerate() {
            let offset = entry[..10].parse::<usize>().unwrap();
            assert!(pdf[offset..].starts_with(&format!("{} 0 obj\n", index + 1)));
        }
    }

    #[test]
    fn test_pdf_string() {
        assert_eq!(pdf_string(r"a (b) \ — é"), r"a \(b\) \\ - ?");
    }
}
