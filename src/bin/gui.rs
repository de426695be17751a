fn main() {
    fretboard_editor::run_gui();
}
