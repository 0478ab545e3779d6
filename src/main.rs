fn main() {
    dice_chart::run();
}
