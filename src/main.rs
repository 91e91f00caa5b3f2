fn main() {
    aula_ui::install();
}
