mod style_sheet;
