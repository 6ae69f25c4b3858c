fn main() {
    evolveme_web::run();
}
